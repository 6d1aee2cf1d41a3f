//! Weather lookup port trait
//!
//! Defines the interface for fetching a city's current conditions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Current conditions for a location
///
/// Only `current.temp_c` is consumed downstream; the ancillary fields are
/// deserialized leniently so upstream payload changes don't break parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub location: WeatherLocation,
    pub current: CurrentWeather,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub localtime: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    #[serde(default)]
    pub temp_f: f64,
    #[serde(default)]
    pub humidity: i64,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub condition: WeatherCondition,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub text: String,
}

/// Port trait for weather lookups
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the current conditions for a city
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, LookupError>;
}
