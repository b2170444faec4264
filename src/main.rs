use udi::config::Config;
use udi::logging;
use udi::models::CityIndicators;
use udi::report::describe_city;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    logging::init_logging();

    let city = CityIndicators::new(3451.0, 0.0659, 0.947, 0.982, 10.3, 77.6);
    let report = describe_city(config.city_name.as_str(), &city)?;

    println!("{}", report);

    Ok(())
}
