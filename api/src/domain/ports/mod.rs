//! Ports layer
//!
//! Trait definitions for the outbound lookup collaborators, plus the data
//! shapes they exchange.

pub mod cep;
pub mod weather;

pub use cep::{CepAddress, CepClient};
pub use weather::{
    CurrentWeather, WeatherClient, WeatherCondition, WeatherLocation, WeatherObservation,
};
