//! Indicator registry: the six UDI indicators and their categories

use crate::indicators::error::IndicatorError;
use crate::indicators::{economy, education, health, infrastructure};
use crate::models::city::CityIndicators;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Economy,
    Education,
    Infrastructure,
    Health,
}

/// One of the six indicators combined into the UDI, in aggregation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Gdp,
    Unemployment,
    Literacy,
    CleanWater,
    HealthAccess,
    LifeExpectancy,
}

/// Trait for anything that maps a raw indicator onto its sub-index
pub trait Indicator {
    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory;

    /// Get the name of the indicator
    fn name(&self) -> &'static str;

    /// Map a raw value onto the sub-index scale
    fn normalize(&self, raw: f64) -> Result<f64, IndicatorError>;
}

impl IndicatorKind {
    /// All indicators in aggregation order
    pub fn all() -> [IndicatorKind; 6] {
        [
            IndicatorKind::Gdp,
            IndicatorKind::Unemployment,
            IndicatorKind::Literacy,
            IndicatorKind::CleanWater,
            IndicatorKind::HealthAccess,
            IndicatorKind::LifeExpectancy,
        ]
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Gdp => "GDP",
            IndicatorKind::Unemployment => "Unemployment",
            IndicatorKind::Literacy => "Literacy",
            IndicatorKind::CleanWater => "Water Access",
            IndicatorKind::HealthAccess => "Health",
            IndicatorKind::LifeExpectancy => "Life Expectancy",
        }
    }

    /// Pick this indicator's raw input out of a city record
    pub fn raw_value(&self, city: &CityIndicators) -> f64 {
        match self {
            IndicatorKind::Gdp => city.gdp_per_capita,
            IndicatorKind::Unemployment => city.unemployment_rate,
            IndicatorKind::Literacy => city.literacy_rate,
            IndicatorKind::CleanWater => city.water_access_rate,
            IndicatorKind::HealthAccess => city.doctors_per_1000,
            IndicatorKind::LifeExpectancy => city.life_expectancy,
        }
    }
}

impl Indicator for IndicatorKind {
    fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Gdp | IndicatorKind::Unemployment => IndicatorCategory::Economy,
            IndicatorKind::Literacy => IndicatorCategory::Education,
            IndicatorKind::CleanWater => IndicatorCategory::Infrastructure,
            IndicatorKind::HealthAccess | IndicatorKind::LifeExpectancy => {
                IndicatorCategory::Health
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Gdp => "gdp",
            IndicatorKind::Unemployment => "unemployment",
            IndicatorKind::Literacy => "literacy",
            IndicatorKind::CleanWater => "clean_water",
            IndicatorKind::HealthAccess => "health_access",
            IndicatorKind::LifeExpectancy => "life_expectancy",
        }
    }

    fn normalize(&self, raw: f64) -> Result<f64, IndicatorError> {
        match self {
            IndicatorKind::Gdp => economy::index_gdp(raw),
            IndicatorKind::Unemployment => economy::index_unemployment(raw),
            IndicatorKind::Literacy => education::index_literacy(raw),
            IndicatorKind::CleanWater => infrastructure::index_clean_water_access(raw),
            IndicatorKind::HealthAccess => health::index_health_access(raw),
            IndicatorKind::LifeExpectancy => health::index_life_expectancy(raw),
        }
    }
}
