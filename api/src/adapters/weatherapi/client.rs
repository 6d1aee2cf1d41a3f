//! WeatherAPI client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{WeatherClient, WeatherObservation};
use crate::error::LookupError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream sentinel for "no matching location found"
const CITY_NOT_FOUND_CODE: i64 = 1006;

/// Error body returned by the weather upstream on non-success statuses
#[derive(Default, Deserialize)]
struct WeatherErrorResponse {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Implementation of the weather lookup against api.weatherapi.com
pub struct WeatherApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, LookupError> {
        tracing::debug!(city, "querying WeatherAPI");

        let response = self
            .http
            .get(&self.base_url)
            .header(ACCEPT, "application/json")
            .query(&[("q", city), ("lang", "pt"), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let upstream: WeatherErrorResponse =
                serde_json::from_str(&body).unwrap_or_default();

            if upstream.code == CITY_NOT_FOUND_CODE {
                return Err(LookupError::CityNotFound);
            }

            return Err(LookupError::Upstream {
                code: upstream.code,
                message: upstream.message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Deserialization(e.to_string()))
    }
}
