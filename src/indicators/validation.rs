//! Domain guards applied before and after each normalization formula

use crate::indicators::error::IndicatorError;

/// Reject NaN input, leaving infinities to the formula
pub fn validate_input(indicator: &'static str, value: f64) -> Result<f64, IndicatorError> {
    if value.is_nan() {
        return Err(IndicatorError::NotANumber { indicator, value });
    }
    Ok(value)
}

/// Reject inputs outside the domain of the natural logarithm
pub fn validate_log_argument(indicator: &'static str, value: f64) -> Result<f64, IndicatorError> {
    let value = validate_input(indicator, value)?;
    if value <= 0.0 {
        return Err(IndicatorError::NonPositiveLogArgument { indicator, value });
    }
    Ok(value)
}

/// Reject a NaN or infinite formula result computed from `input`
pub fn validate_result(
    indicator: &'static str,
    input: f64,
    result: f64,
) -> Result<f64, IndicatorError> {
    if !result.is_finite() {
        return Err(IndicatorError::NonFiniteResult {
            indicator,
            value: input,
        });
    }
    Ok(result)
}
