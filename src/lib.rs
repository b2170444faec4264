//! Urban Development Index: six socioeconomic indicators normalized into
//! sub-indices and combined by geometric mean

pub mod common;
pub mod config;
pub mod index;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;

pub use index::{compute_udi, compute_udi_for, geometric_mean, score_city, UdiBreakdown};
pub use indicators::{
    index_clean_water_access, index_gdp, index_health_access, index_life_expectancy,
    index_literacy, index_unemployment, IndicatorError,
};
pub use models::{CityIndicators, SubIndices};
pub use report::{describe_city, CityReport};
