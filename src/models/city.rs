use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::registry::{Indicator, IndicatorKind};

/// The six raw indicators of a city, in the order the UDI consumes them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityIndicators {
    /// Real GDP per capita in currency units
    pub gdp_per_capita: f64,
    /// Unemployment as a fraction, e.g. 0.0659
    pub unemployment_rate: f64,
    /// Literate share of the population, e.g. 0.947
    pub literacy_rate: f64,
    /// Share with access to clean water, e.g. 0.982
    pub water_access_rate: f64,
    /// Health professionals per 1000 residents
    pub doctors_per_1000: f64,
    /// Life expectancy in years
    pub life_expectancy: f64,
}

impl CityIndicators {
    /// Build a record from the raw indicators in aggregation order
    pub fn new(
        gdp_per_capita: f64,
        unemployment_rate: f64,
        literacy_rate: f64,
        water_access_rate: f64,
        doctors_per_1000: f64,
        life_expectancy: f64,
    ) -> Self {
        Self {
            gdp_per_capita,
            unemployment_rate,
            literacy_rate,
            water_access_rate,
            doctors_per_1000,
            life_expectancy,
        }
    }
}

/// Normalized sub-indices, nominally 0-100 but never clamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubIndices {
    pub gdp: f64,
    pub unemployment: f64,
    pub literacy: f64,
    pub clean_water: f64,
    pub health_access: f64,
    pub life_expectancy: f64,
}

impl SubIndices {
    /// Normalize every raw indicator, failing on the first domain error
    pub fn from_indicators(city: &CityIndicators) -> Result<Self, IndicatorError> {
        let mut values = [0.0; 6];
        for (slot, kind) in values.iter_mut().zip(IndicatorKind::all()) {
            *slot = kind.normalize(kind.raw_value(city))?;
        }
        Ok(Self::from_array(values))
    }

    /// Build from sub-indices listed in aggregation order
    pub fn from_array(values: [f64; 6]) -> Self {
        let [gdp, unemployment, literacy, clean_water, health_access, life_expectancy] = values;
        Self {
            gdp,
            unemployment,
            literacy,
            clean_water,
            health_access,
            life_expectancy,
        }
    }

    /// Sub-index for one indicator
    pub fn get(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::Gdp => self.gdp,
            IndicatorKind::Unemployment => self.unemployment,
            IndicatorKind::Literacy => self.literacy,
            IndicatorKind::CleanWater => self.clean_water,
            IndicatorKind::HealthAccess => self.health_access,
            IndicatorKind::LifeExpectancy => self.life_expectancy,
        }
    }

    /// Sub-indices in aggregation order
    pub fn as_array(&self) -> [f64; 6] {
        IndicatorKind::all().map(|kind| self.get(kind))
    }

    /// Product of the six sub-indices, multiplied in indicator order
    pub fn product(&self) -> f64 {
        self.as_array().iter().product()
    }

    /// Number of sub-indices below zero
    pub fn negative_count(&self) -> usize {
        self.as_array().iter().filter(|v| **v < 0.0).count()
    }
}
