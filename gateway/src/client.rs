//! HTTP client for the forecast API
//!
//! Calls the back service's `/cidades/{cep}/temperaturas` endpoint with the
//! raw (pre-validated, unnormalized) code and re-derives the error kind from
//! the response status code.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Temperature triple computed by the forecast API
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

/// HTTP client for communicating with the forecast API
#[derive(Clone)]
pub struct ForecastApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForecastApiClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the temperature report for a postal code
    pub async fn calculate(&self, cep: &str) -> Result<TemperatureReport, GatewayError> {
        let response = self
            .http
            .get(format!("{}/cidades/{}/temperaturas", self.base_url, cep))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNPROCESSABLE_ENTITY => GatewayError::InvalidZipCode,
                StatusCode::NOT_FOUND => GatewayError::ZipCodeNotFound,
                _ => GatewayError::Status {
                    status: status.as_u16(),
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Deserialization(e.to_string()))
    }
}
