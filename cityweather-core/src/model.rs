use serde::{Deserialize, Serialize};

use crate::provider::LookupError;

/// A validated city name: trimmed, guaranteed non-empty.
///
/// Constructing one is the only way to reach the weather provider, so
/// empty or whitespace-only input is rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn new(raw: &str) -> Result<Self, LookupError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one city, produced by a single successful lookup.
///
/// Consumed once by the renderer and then discarded; there is no caching
/// or history. The displayed date comes from the local clock at render
/// time, not from anything in here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    /// Provider icon code, e.g. "04d". Resolved to an image URL by the renderer.
    pub icon: String,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}
