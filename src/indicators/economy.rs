//! Economic indicators: GDP per capita and unemployment

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_input, validate_log_argument, validate_result};

/// GDP per capita mapped to a sub-index of 0
pub const GDP_FLOOR: f64 = 604.0;
/// GDP per capita mapped to a sub-index of 100
pub const GDP_CEILING: f64 = 145_894.0;

/// Sub-index offset added after the unemployment term is rounded
pub const UNEMPLOYMENT_OFFSET: f64 = 113.5;
/// Sub-index points lost per percentage point of unemployment
pub const UNEMPLOYMENT_SLOPE: f64 = 99.0 / 22.0;

/// Calculate the GDP sub-index from real GDP per capita (e.g. 3451)
///
/// GDP = 100 * (ln(x) - ln(604)) / (ln(145894) - ln(604))
///
/// Values below the floor give a negative sub-index, values above the
/// ceiling exceed 100. Non-positive input is a domain error.
pub fn index_gdp(per_capita: f64) -> Result<f64, IndicatorError> {
    let x = validate_log_argument("gdp", per_capita)?;
    let floor = GDP_FLOOR.ln();
    let value = 100.0 * ((x.ln() - floor) / (GDP_CEILING.ln() - floor));
    validate_result("gdp", per_capita, value)
}

/// Calculate the unemployment sub-index from a rate such as 0.0659
///
/// The linear term is rounded to a whole number before the offset is added,
/// so the result always ends in .5.
pub fn index_unemployment(rate: f64) -> Result<f64, IndicatorError> {
    let rate = validate_input("unemployment", rate)?;
    let value = math::round_half_even(-UNEMPLOYMENT_SLOPE * (100.0 * rate)) + UNEMPLOYMENT_OFFSET;
    validate_result("unemployment", rate, value)
}
