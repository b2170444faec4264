//! Geometric-mean aggregation of the six sub-indices into the UDI

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::city::{CityIndicators, SubIndices};

/// Decimal places kept in the final score
pub const UDI_DECIMALS: u32 = 2;

/// Sub-indices together with the score they produce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UdiBreakdown {
    pub sub_indices: SubIndices,
    pub udi: f64,
}

/// Unrounded geometric mean of `values`
///
/// A product of zero gives zero. A negative product has no real n-th root
/// and is rejected.
pub fn geometric_mean(values: &[f64]) -> Result<f64, IndicatorError> {
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }

    let product: f64 = values.iter().product();
    if !product.is_finite() {
        return Err(IndicatorError::NonFiniteProduct { product });
    }
    if product < 0.0 {
        return Err(IndicatorError::NegativeProduct { product });
    }

    Ok(product.powf(1.0 / values.len() as f64))
}

/// Score a city: normalize each indicator, then take the rounded geometric mean
pub fn score_city(city: &CityIndicators) -> Result<UdiBreakdown, IndicatorError> {
    let sub_indices = SubIndices::from_indicators(city)?;

    let mean = geometric_mean(&sub_indices.as_array()).map_err(|e| {
        warn!(
            error = %e,
            negative_sub_indices = sub_indices.negative_count(),
            "UDI aggregation failed"
        );
        e
    })?;
    let udi = math::round_to(mean, UDI_DECIMALS);

    debug!(
        gdp = sub_indices.gdp,
        unemployment = sub_indices.unemployment,
        literacy = sub_indices.literacy,
        clean_water = sub_indices.clean_water,
        health_access = sub_indices.health_access,
        life_expectancy = sub_indices.life_expectancy,
        udi,
        "UDI computed"
    );

    Ok(UdiBreakdown { sub_indices, udi })
}

/// UDI of a city record, rounded to two decimals
pub fn compute_udi_for(city: &CityIndicators) -> Result<f64, IndicatorError> {
    score_city(city).map(|breakdown| breakdown.udi)
}

/// UDI from the six raw indicators in their fixed order
pub fn compute_udi(
    gdp_per_capita: f64,
    unemployment_rate: f64,
    literacy_rate: f64,
    water_access_rate: f64,
    doctors_per_1000: f64,
    life_expectancy: f64,
) -> Result<f64, IndicatorError> {
    compute_udi_for(&CityIndicators::new(
        gdp_per_capita,
        unemployment_rate,
        literacy_rate,
        water_access_rate,
        doctors_per_1000,
        life_expectancy,
    ))
}
