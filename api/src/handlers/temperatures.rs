//! Temperature handlers
//!
//! Endpoint resolving a postal code to its city's current temperatures.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::TemperatureReport;
use crate::domain::ports::{CepClient, WeatherClient};
use crate::error::AppError;
use crate::AppState;

/// GET /cidades/:cep/temperaturas
///
/// Resolve a raw (possibly punctuated) postal code to its city and report
/// the current temperature in Celsius, Fahrenheit and Kelvin.
pub async fn get_city_temperatures<C, W>(
    State(state): State<AppState<C, W>>,
    Path(cep): Path<String>,
) -> Result<Json<TemperatureReport>, AppError>
where
    C: CepClient,
    W: WeatherClient,
{
    let report = state.forecast_service.process(&cep).await?;

    tracing::info!(cep = %cep, city = %report.city, "temperatures resolved");

    Ok(Json(report))
}
