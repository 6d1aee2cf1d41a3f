//! Test fixtures

use crate::domain::ports::{CepAddress, CurrentWeather, WeatherLocation, WeatherObservation};

/// Address for the Praça da Sé reference code
pub fn sao_paulo_address() -> CepAddress {
    CepAddress {
        cep: "01001000".to_string(),
        logradouro: "Praça da Sé".to_string(),
        complemento: "lado ímpar".to_string(),
        bairro: "Sé".to_string(),
        localidade: "São Paulo".to_string(),
        uf: "SP".to_string(),
    }
}

/// Observation with the given Celsius reading; ancillary fields are filled
/// with plausible values that nothing downstream consumes.
pub fn observation(temp_c: f64) -> WeatherObservation {
    WeatherObservation {
        location: WeatherLocation {
            name: "Sao Paulo".to_string(),
            region: "Sao Paulo".to_string(),
            country: "Brazil".to_string(),
            localtime: "2024-05-21 14:00".to_string(),
        },
        current: CurrentWeather {
            temp_c,
            humidity: 62,
            wind_kph: 11.2,
            ..CurrentWeather::default()
        },
    }
}
