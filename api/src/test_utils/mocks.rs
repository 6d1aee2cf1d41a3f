//! Mock implementations of port traits
//!
//! Each mock returns a canned outcome configured at construction time and
//! counts how often it was invoked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{CepAddress, CepClient, WeatherClient, WeatherObservation};
use crate::error::LookupError;

/// Canned outcome for a postal-code lookup
pub enum CepOutcome {
    Address(CepAddress),
    NotFound,
    Status(u16),
}

pub struct MockCepClient {
    outcome: CepOutcome,
    calls: AtomicUsize,
    last_lookup: RwLock<Option<String>>,
}

impl MockCepClient {
    pub fn returning(outcome: CepOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_lookup: RwLock::new(None),
        }
    }

    pub fn with_address(address: CepAddress) -> Self {
        Self::returning(CepOutcome::Address(address))
    }

    pub fn not_found() -> Self {
        Self::returning(CepOutcome::NotFound)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The code passed to the most recent lookup, if any
    pub fn last_lookup(&self) -> Option<String> {
        self.last_lookup.read().unwrap().clone()
    }
}

#[async_trait]
impl CepClient for MockCepClient {
    async fn lookup_address(&self, cep: &str) -> Result<CepAddress, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_lookup.write().unwrap() = Some(cep.to_string());

        match &self.outcome {
            CepOutcome::Address(address) => Ok(address.clone()),
            CepOutcome::NotFound => Err(LookupError::ZipCodeNotFound),
            CepOutcome::Status(status) => Err(LookupError::Status { status: *status }),
        }
    }
}

/// Canned outcome for a weather lookup
pub enum WeatherOutcome {
    Observation(WeatherObservation),
    CityNotFound,
    Upstream { code: i64, message: String },
}

pub struct MockWeatherClient {
    outcome: WeatherOutcome,
    calls: AtomicUsize,
}

impl MockWeatherClient {
    pub fn returning(outcome: WeatherOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_observation(observation: WeatherObservation) -> Self {
        Self::returning(WeatherOutcome::Observation(observation))
    }

    pub fn city_not_found() -> Self {
        Self::returning(WeatherOutcome::CityNotFound)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherClient for MockWeatherClient {
    async fn current_weather(&self, _city: &str) -> Result<WeatherObservation, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            WeatherOutcome::Observation(observation) => Ok(observation.clone()),
            WeatherOutcome::CityNotFound => Err(LookupError::CityNotFound),
            WeatherOutcome::Upstream { code, message } => Err(LookupError::Upstream {
                code: *code,
                message: message.clone(),
            }),
        }
    }
}
