//! Forecast API server
//!
//! Back service of the CEP → temperature pipeline: resolves a Brazilian
//! postal code to its city via ViaCEP, then fetches the city's current
//! conditions from WeatherAPI and reports the temperature in Celsius,
//! Fahrenheit and Kelvin. Uses hexagonal (ports & adapters) architecture
//! for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ViaCepClient, WeatherApiClient};
use app::{AddressService, ForecastService, TemperatureService};
use config::Config;
use domain::ports::{CepClient, WeatherClient};

/// Application state shared across all handlers
pub struct AppState<C, W>
where
    C: CepClient,
    W: WeatherClient,
{
    pub forecast_service: Arc<ForecastService<C, W>>,
}

// derive(Clone) would require C: Clone + W: Clone
impl<C, W> Clone for AppState<C, W>
where
    C: CepClient,
    W: WeatherClient,
{
    fn clone(&self) -> Self {
        Self {
            forecast_service: self.forecast_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any pair of lookup clients, so tests can run the
/// full HTTP surface against mocks.
pub fn router<C, W>(state: AppState<C, W>) -> Router
where
    C: CepClient + 'static,
    W: WeatherClient + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/cidades/:cep/temperaturas",
            get(handlers::get_city_temperatures::<C, W>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cepweather_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting forecast API...");

    // Load configuration; missing required variables are fatal
    let config = Config::from_env();
    tracing::info!(ambiente = %config.ambiente_publicacao, "Configuration loaded");

    // Create adapters
    let cep_client = Arc::new(
        ViaCepClient::new(config.viacep_url.clone()).expect("Failed to build ViaCEP client"),
    );
    let weather_client = Arc::new(
        WeatherApiClient::new(
            config.weather_api_url.clone(),
            config.weather_api_key.clone(),
        )
        .expect("Failed to build WeatherAPI client"),
    );

    // Create application services
    let address_service = AddressService::new(cep_client);
    let temperature_service = TemperatureService::new(weather_client);
    let forecast_service = Arc::new(ForecastService::new(address_service, temperature_service));

    let state = AppState { forecast_service };
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
