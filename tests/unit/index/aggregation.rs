//! Unit tests for UDI aggregation

use udi::common::math::round_to;
use udi::index::{compute_udi, compute_udi_for, geometric_mean, score_city};
use udi::indicators::{
    index_clean_water_access, index_gdp, index_health_access, index_life_expectancy,
    index_literacy, index_unemployment, IndicatorError,
};
use udi::models::{CityIndicators, SubIndices};

fn sample_city() -> CityIndicators {
    CityIndicators::new(3451.0, 0.0659, 0.947, 0.982, 10.3, 77.6)
}

#[test]
fn test_sample_city_udi() {
    assert_eq!(compute_udi(3451.0, 0.0659, 0.947, 0.982, 10.3, 77.6).unwrap(), 75.86);
}

#[test]
fn test_udi_matches_formula_composition() {
    let product = index_gdp(3451.0).unwrap()
        * index_unemployment(0.0659).unwrap()
        * index_literacy(0.947).unwrap()
        * index_clean_water_access(0.982).unwrap()
        * index_health_access(10.3).unwrap()
        * index_life_expectancy(77.6).unwrap();
    let expected = round_to(product.powf(1.0 / 6.0), 2);

    assert_eq!(compute_udi_for(&sample_city()).unwrap(), expected);
}

#[test]
fn test_score_city_breakdown() {
    let breakdown = score_city(&sample_city()).unwrap();
    assert_eq!(breakdown.udi, 75.86);
    assert_eq!(breakdown.sub_indices.unemployment, 83.5);
    assert_eq!(breakdown.sub_indices.literacy, 89.51);
    assert_eq!(
        breakdown.sub_indices,
        SubIndices::from_indicators(&sample_city()).unwrap()
    );
}

#[test]
fn test_single_negative_sub_index_is_domain_error() {
    // water access of 5% gives a clean-water sub-index of -4.5
    let result = compute_udi(3451.0, 0.0659, 0.947, 0.05, 10.3, 77.6);
    let err = result.unwrap_err();
    assert!(matches!(err, IndicatorError::NegativeProduct { product } if product < 0.0));
    assert!(err.is_domain_error());
}

#[test]
fn test_two_negative_sub_indices_cancel() {
    // GDP below the floor and low water access are both negative
    let city = CityIndicators::new(300.0, 0.0659, 0.947, 0.05, 10.3, 77.6);
    let sub = SubIndices::from_indicators(&city).unwrap();
    assert_eq!(sub.negative_count(), 2);
    assert_eq!(compute_udi_for(&city).unwrap(), 38.99);
}

#[test]
fn test_zero_sub_index_gives_zero_udi() {
    assert_eq!(compute_udi(604.0, 0.0659, 0.947, 0.982, 10.3, 77.6).unwrap(), 0.0);
}

#[test]
fn test_invalid_gdp_propagates() {
    assert!(matches!(
        compute_udi(0.0, 0.0659, 0.947, 0.982, 10.3, 77.6),
        Err(IndicatorError::NonPositiveLogArgument { indicator: "gdp", .. })
    ));
}

#[test]
fn test_geometric_mean() {
    assert_eq!(geometric_mean(&[4.0, 1.0]).unwrap(), 2.0);
    assert_eq!(geometric_mean(&[7.0]).unwrap(), 7.0);
    assert_eq!(geometric_mean(&[5.0, 0.0, 3.0]).unwrap(), 0.0);
    assert!(matches!(geometric_mean(&[]), Err(IndicatorError::EmptyInput)));
    assert!(matches!(
        geometric_mean(&[-1.0, 2.0]),
        Err(IndicatorError::NegativeProduct { .. })
    ));
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let first = compute_udi_for(&sample_city()).unwrap();
    let second = compute_udi_for(&sample_city()).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_product_overflow_is_reported_as_product_error() {
    let err = geometric_mean(&[1e300, 1e300]).unwrap_err();
    assert!(matches!(err, IndicatorError::NonFiniteProduct { .. }));
    assert_eq!(err.indicator(), None);
    assert!(err.to_string().contains("product of sub-indices is not finite"));
}
