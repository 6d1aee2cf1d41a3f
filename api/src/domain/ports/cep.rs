//! Postal-code lookup port trait
//!
//! Defines the interface for resolving a postal code to its address.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Address resolved from a postal code
///
/// Only `localidade` (the city) is consumed downstream; the remaining fields
/// are carried through for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepAddress {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

/// Port trait for postal-code lookups
#[async_trait]
pub trait CepClient: Send + Sync {
    /// Resolve a postal code to its address
    ///
    /// `cep` is expected to already be in normalized digit-only form; the
    /// implementation re-checks the shape defensively before any request
    /// leaves the process.
    async fn lookup_address(&self, cep: &str) -> Result<CepAddress, LookupError>;
}
