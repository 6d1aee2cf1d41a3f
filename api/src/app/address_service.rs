//! Postal-code lookup use case

use std::sync::Arc;

use crate::domain::entities::ZipCode;
use crate::domain::ports::{CepAddress, CepClient};
use crate::error::LookupError;

/// Resolves a validated postal code to its address through the CEP port.
pub struct AddressService<C>
where
    C: CepClient,
{
    cep_client: Arc<C>,
}

impl<C> AddressService<C>
where
    C: CepClient,
{
    pub fn new(cep_client: Arc<C>) -> Self {
        Self { cep_client }
    }

    /// Look up the address for a postal code; failures propagate unchanged.
    pub async fn execute(&self, cep: &ZipCode) -> Result<CepAddress, LookupError> {
        self.cep_client.lookup_address(cep.as_str()).await
    }
}
