//! HTTP handlers
//!
//! Axum request handlers for the gateway endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::client::TemperatureReport;
use crate::error::GatewayError;
use crate::zipcode;
use crate::AppState;

/// Request body for the temperature endpoint
#[derive(Debug, Deserialize)]
pub struct CepRequest {
    #[serde(default)]
    pub cep: String,
}

/// POST /temperaturas
///
/// Validate the postal code's shape locally, then relay the forecast API's
/// report verbatim.
pub async fn post_temperaturas(
    State(state): State<AppState>,
    Json(request): Json<CepRequest>,
) -> Result<Json<TemperatureReport>, GatewayError> {
    if !zipcode::is_valid(&request.cep) {
        return Err(GatewayError::InvalidZipCode);
    }

    tracing::debug!(cep = %request.cep, "forwarding to forecast API");

    let report = state.forecast_client.calculate(&request.cep).await?;

    Ok(Json(report))
}
