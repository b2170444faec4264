//! Education indicators

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_input, validate_result};

/// Calculate the literacy sub-index from a literate share such as 0.947
///
/// Literacy = round((99/50) * (100 * rate) - 98, 2)
pub fn index_literacy(rate: f64) -> Result<f64, IndicatorError> {
    let rate = validate_input("literacy", rate)?;
    let value = math::round_to(((99.0 / 50.0) * (100.0 * rate)) - 98.0, 2);
    validate_result("literacy", rate, value)
}
