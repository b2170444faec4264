//! Infrastructure indicators

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_input, validate_result};

/// Calculate the clean-water sub-index from an access share such as 0.982
///
/// Unrounded. Access below roughly 9% yields a negative sub-index.
pub fn index_clean_water_access(rate: f64) -> Result<f64, IndicatorError> {
    let rate = validate_input("clean_water", rate)?;
    let value = ((99.0 / 90.0) * (100.0 * rate)) - 10.0;
    validate_result("clean_water", rate, value)
}
