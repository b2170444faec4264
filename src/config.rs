//! Environment-driven configuration

use std::env;

pub const DEFAULT_ENVIRONMENT: &str = "sandbox";
pub const DEFAULT_CITY_NAME: &str = "Sample City";

/// Deployment environment, from `UDI_ENV` then `ENVIRONMENT`, defaulting to sandbox
pub fn get_environment() -> String {
    env::var("UDI_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|value| value.trim().to_lowercase())
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    /// Label printed for the demonstration city
    pub city_name: String,
}

impl Config {
    /// Load `.env` if present, then read settings from the environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let city_name = env::var("UDI_CITY_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CITY_NAME.to_string());

        Self {
            environment: get_environment(),
            city_name,
        }
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            city_name: DEFAULT_CITY_NAME.to_string(),
        }
    }
}
