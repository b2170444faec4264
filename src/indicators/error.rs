//! Indicator errors

/// Errors raised while normalizing indicators or aggregating the UDI
///
/// Out-of-range sub-indices are not errors. Only inputs or intermediates
/// that leave the real domain of a formula are reported here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicatorError {
    /// Raw input was NaN
    #[error("{indicator}: input is not a number")]
    NotANumber { indicator: &'static str, value: f64 },

    /// Logarithm of a non-positive value
    #[error("{indicator}: logarithm undefined for non-positive input {value}")]
    NonPositiveLogArgument { indicator: &'static str, value: f64 },

    /// The formula produced NaN or an infinity for this input
    #[error("{indicator}: formula result is not finite for input {value}")]
    NonFiniteResult { indicator: &'static str, value: f64 },

    /// Product of sub-indices overflowed or became NaN
    #[error("geometric mean undefined: product of sub-indices is not finite ({product})")]
    NonFiniteProduct { product: f64 },

    /// Sixth root of a negative product has no real value
    #[error("geometric mean undefined: product of sub-indices is negative ({product})")]
    NegativeProduct { product: f64 },

    /// Geometric mean over zero values
    #[error("geometric mean undefined: no values supplied")]
    EmptyInput,
}

impl IndicatorError {
    /// True when the error comes from leaving a formula's mathematical domain
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, IndicatorError::EmptyInput)
    }

    /// Name of the indicator that failed, if the error is tied to one
    pub fn indicator(&self) -> Option<&'static str> {
        match self {
            IndicatorError::NotANumber { indicator, .. }
            | IndicatorError::NonPositiveLogArgument { indicator, .. }
            | IndicatorError::NonFiniteResult { indicator, .. } => Some(*indicator),
            IndicatorError::NonFiniteProduct { .. }
            | IndicatorError::NegativeProduct { .. }
            | IndicatorError::EmptyInput => None,
        }
    }
}
