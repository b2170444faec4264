pub mod error;
pub mod validation;
pub mod registry;

pub mod economy;
pub mod education;
pub mod infrastructure;
pub mod health;

pub use error::IndicatorError;
pub use registry::*;

pub use economy::{index_gdp, index_unemployment};
pub use education::index_literacy;
pub use health::{index_health_access, index_life_expectancy};
pub use infrastructure::index_clean_water_access;
