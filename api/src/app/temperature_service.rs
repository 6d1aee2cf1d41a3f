//! Temperature calculation use case
//!
//! Fetches a city's current conditions and renders the reading in the three
//! supported scales.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::City;
use crate::domain::ports::{WeatherClient, WeatherObservation};
use crate::domain::units;
use crate::error::LookupError;

/// Terminal output of the pipeline: one temperature string per scale,
/// each formatted to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub celsius: String,
    #[serde(rename = "temp_F")]
    pub fahrenheit: String,
    #[serde(rename = "temp_K")]
    pub kelvin: String,
}

pub struct TemperatureService<W>
where
    W: WeatherClient,
{
    weather_client: Arc<W>,
}

impl<W> TemperatureService<W>
where
    W: WeatherClient,
{
    pub fn new(weather_client: Arc<W>) -> Self {
        Self { weather_client }
    }

    /// Fetch the city's current reading and build the report; weather
    /// failures propagate unchanged.
    pub async fn execute(&self, city: &City) -> Result<TemperatureReport, LookupError> {
        let observation = self.weather_client.current_weather(city.as_str()).await?;

        Ok(build_report(city, &observation))
    }
}

fn build_report(city: &City, observation: &WeatherObservation) -> TemperatureReport {
    let celsius = observation.current.temp_c;

    TemperatureReport {
        city: city.as_str().to_string(),
        celsius: format!("{:.1}", celsius),
        fahrenheit: format!("{:.1}", units::celsius_to_fahrenheit(celsius)),
        kelvin: format!("{:.1}", units::celsius_to_kelvin(celsius)),
    }
}
