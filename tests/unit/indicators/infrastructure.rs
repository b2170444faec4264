//! Unit tests for the clean-water sub-index

use udi::indicators::infrastructure::index_clean_water_access;

#[test]
fn test_clean_water_ninety_percent() {
    // (99/90) * 90 - 10
    let value = index_clean_water_access(0.90).unwrap();
    assert!((value - 89.0).abs() < 1e-12);
}

#[test]
fn test_clean_water_sample_city() {
    let value = index_clean_water_access(0.982).unwrap();
    assert!((value - 98.02).abs() < 1e-9);
}

#[test]
fn test_clean_water_low_access_goes_negative() {
    assert_eq!(index_clean_water_access(0.0).unwrap(), -10.0);
    assert!(index_clean_water_access(0.05).unwrap() < 0.0);
}

#[test]
fn test_clean_water_not_clamped_above_full_access() {
    assert!(index_clean_water_access(1.0).unwrap() > 99.0);
    assert!(index_clean_water_access(1.5).unwrap() > 150.0);
}
