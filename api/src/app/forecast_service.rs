//! Forecast orchestration
//!
//! Linear pipeline from raw postal code to the three-scale report:
//! validate the code, resolve its address, validate the city, fetch the
//! temperatures. Short-circuits on the first failure and never recovers
//! locally; the HTTP layer maps whatever comes out.

use crate::app::{AddressService, TemperatureReport, TemperatureService};
use crate::domain::entities::{City, ZipCode};
use crate::domain::ports::{CepClient, WeatherClient};
use crate::error::AppError;

pub struct ForecastService<C, W>
where
    C: CepClient,
    W: WeatherClient,
{
    address_service: AddressService<C>,
    temperature_service: TemperatureService<W>,
}

impl<C, W> ForecastService<C, W>
where
    C: CepClient,
    W: WeatherClient,
{
    pub fn new(
        address_service: AddressService<C>,
        temperature_service: TemperatureService<W>,
    ) -> Self {
        Self {
            address_service,
            temperature_service,
        }
    }

    pub async fn process(&self, raw_cep: &str) -> Result<TemperatureReport, AppError> {
        let cep = ZipCode::new(raw_cep)?;

        let address = self.address_service.execute(&cep).await?;

        let city = City::new(&address.localidade)?;

        let report = self.temperature_service.execute(&city).await?;

        Ok(report)
    }
}
