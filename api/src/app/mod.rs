//! Application services
//!
//! Use cases composing the domain with the outbound ports.

pub mod address_service;
pub mod forecast_service;
pub mod temperature_service;

pub use address_service::AddressService;
pub use forecast_service::ForecastService;
pub use temperature_service::{TemperatureReport, TemperatureService};
