//! Human-readable city summaries

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::index::aggregation::score_city;
use crate::indicators::error::IndicatorError;
use crate::indicators::registry::IndicatorKind;
use crate::models::city::{CityIndicators, SubIndices};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityReport {
    pub city: String,
    pub indicators: CityIndicators,
    pub sub_indices: SubIndices,
    pub udi: f64,
    pub generated_at: DateTime<Utc>,
}

impl CityReport {
    /// `(label, sub-index)` pairs in aggregation order
    pub fn lines(&self) -> Vec<(&'static str, f64)> {
        IndicatorKind::all()
            .into_iter()
            .map(|kind| (kind.label(), self.sub_indices.get(kind)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzing city: {}", self.city)?;
        for (label, value) in self.lines() {
            writeln!(f, "Index value for {}: {}", label, value)?;
        }
        write!(f, "UDI: {}", self.udi)
    }
}

/// Score a city and package the result for display
pub fn describe_city(
    name: impl Into<String>,
    indicators: &CityIndicators,
) -> Result<CityReport, IndicatorError> {
    let city = name.into();
    let breakdown = score_city(indicators)?;

    info!(city = %city, udi = breakdown.udi, "City analyzed");

    Ok(CityReport {
        city,
        indicators: *indicators,
        sub_indices: breakdown.sub_indices,
        udi: breakdown.udi,
        generated_at: Utc::now(),
    })
}
