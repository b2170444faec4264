//! Health indicators, both modelled as saturating logistic curves

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_input, validate_result};

pub const HEALTH_ACCESS_SCALE: f64 = 99.0;
pub const HEALTH_ACCESS_STEEPNESS: f64 = 0.919_023_97;

pub const LIFE_EXPECTANCY_SCALE: f64 = 36_129.252_86;
pub const LIFE_EXPECTANCY_STEEPNESS: f64 = 0.155_256_271;

/// Calculate the health-access sub-index from health professionals per
/// 1000 residents (e.g. 10.3)
///
/// Health = 100 / (1 + 99 * e^(-0.91902397 * x))
///
/// Equals 1 with no professionals and approaches 100 as access grows.
pub fn index_health_access(doctors_per_1000: f64) -> Result<f64, IndicatorError> {
    let x = validate_input("health_access", doctors_per_1000)?;
    let value = math::logistic(x, HEALTH_ACCESS_SCALE, HEALTH_ACCESS_STEEPNESS);
    validate_result("health_access", x, value)
}

/// Calculate the life-expectancy sub-index from expected age in years
/// (e.g. 77.6)
///
/// Life = 100 / (1 + 36129.25286 * e^(-0.155256271 * years))
pub fn index_life_expectancy(years: f64) -> Result<f64, IndicatorError> {
    let years = validate_input("life_expectancy", years)?;
    let value = math::logistic(years, LIFE_EXPECTANCY_SCALE, LIFE_EXPECTANCY_STEEPNESS);
    validate_result("life_expectancy", years, value)
}
