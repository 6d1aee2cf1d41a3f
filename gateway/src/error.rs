//! Gateway error types
//!
//! Domain error identity does not cross the process boundary: failures from
//! the forecast API are re-derived from its HTTP status codes alone, then
//! mapped back onto this service's own responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Local shape check failed, or the forecast API answered 422
    #[error("invalid zipcode")]
    InvalidZipCode,

    /// The forecast API answered 404
    #[error("can not find zipcode")]
    ZipCodeNotFound,

    /// Any other non-success status from the forecast API
    #[error("error fetching data: {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidZipCode => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::ZipCodeNotFound => StatusCode::NOT_FOUND,
            e => {
                tracing::error!("forecast request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
