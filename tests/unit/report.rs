//! Unit tests for city reports

use udi::indicators::IndicatorError;
use udi::models::CityIndicators;
use udi::report::describe_city;

fn sample_city() -> CityIndicators {
    CityIndicators::new(3451.0, 0.0659, 0.947, 0.982, 10.3, 77.6)
}

#[test]
fn test_report_contains_every_line() {
    let report = describe_city("Sample City", &sample_city()).unwrap();
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Analyzing city: Sample City");
    assert!(lines[1].starts_with("Index value for GDP: 31.76"));
    assert_eq!(lines[2], "Index value for Unemployment: 83.5");
    assert_eq!(lines[3], "Index value for Literacy: 89.51");
    assert!(lines[4].starts_with("Index value for Water Access: 98.02"));
    assert!(lines[5].starts_with("Index value for Health: 99.23"));
    assert!(lines[6].starts_with("Index value for Life Expectancy: 82.53"));
    assert_eq!(lines[7], "UDI: 75.86");
}

#[test]
fn test_report_json() {
    let report = describe_city("Sample City", &sample_city()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["city"], "Sample City");
    assert_eq!(json["udi"], 75.86);
    assert_eq!(json["sub_indices"]["unemployment"], 83.5);
    assert_eq!(json["indicators"]["gdp_per_capita"], 3451.0);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_report_propagates_domain_error() {
    let mut city = sample_city();
    city.water_access_rate = 0.05;
    assert!(matches!(
        describe_city("Dry Town", &city),
        Err(IndicatorError::NegativeProduct { .. })
    ));
}
