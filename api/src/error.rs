//! Unified error types for the forecast API
//!
//! This module defines error types for each layer:
//! - `DomainError`: value-object construction failures
//! - `LookupError`: outbound lookup client errors (ViaCEP / WeatherAPI)
//! - `AppError`: application layer errors (maps failures onto HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Domain layer errors - pure validation failures
///
/// The display strings are part of the HTTP contract; callers receive them
/// verbatim as response bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid zipcode")]
    InvalidZipCode,

    #[error("city is required")]
    CityRequired,
}

/// Outbound lookup client errors
#[derive(Debug, Error)]
pub enum LookupError {
    /// Postal code failed the local shape check before any request was made
    #[error("invalid zipcode")]
    InvalidZipCode,

    /// The postal-code upstream flagged the code as unknown
    #[error("can not find zipcode")]
    ZipCodeNotFound,

    /// The weather upstream reported its "no matching location" sentinel
    #[error("can not find city")]
    CityNotFound,

    /// Structured error body returned by the weather upstream, verbatim
    #[error("{code} :: {message}")]
    Upstream { code: i64, message: String },

    /// Non-success status without a structured body
    #[error("error fetching data: {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Lookup(#[from] LookupError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Domain(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Lookup(LookupError::InvalidZipCode) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Lookup(LookupError::ZipCodeNotFound | LookupError::CityNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Lookup(e) => {
                tracing::error!("Lookup error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
