//! ViaCEP adapter

pub mod client;

pub use client::ViaCepClient;
