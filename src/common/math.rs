//! Rounding and curve helpers shared by the indicator normalizers
//!
//! Every rounding step in the crate goes through this module so that the
//! half-way rule is the same everywhere: ties round to the even neighbour.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest integer, ties to even
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to `decimals` decimal places, ties to even
///
/// Rounds the exact binary value of `value`, so 10.405000000000001 goes up
/// and 0.125 goes down. Magnitudes too large for `Decimal` carry no
/// fractional digits and come back unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    exact
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
        .to_string()
        .parse::<f64>()
        .unwrap_or(value)
}

/// Saturating logistic curve `100 / (1 + scale * e^(-steepness * x))`
///
/// Tends to 0 as `x` goes to negative infinity and to 100 as `x` grows.
pub fn logistic(x: f64, scale: f64, steepness: f64) -> f64 {
    100.0 / (1.0 + scale * (-steepness * x).exp())
}
