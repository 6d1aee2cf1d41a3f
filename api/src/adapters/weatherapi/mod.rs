//! WeatherAPI adapter

pub mod client;

pub use client::WeatherApiClient;
