//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod temperatures;

pub use temperatures::get_city_temperatures;
