//! ViaCEP API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};

use crate::domain::entities::zipcode;
use crate::domain::ports::{CepAddress, CepClient};
use crate::error::LookupError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// ViaCEP signals an unknown code with `"erro": true`; older responses used
/// the string `"true"`. Accept both.
fn deserialize_erro<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Erro {
        Flag(bool),
        Text(String),
    }

    Ok(match Option::<Erro>::deserialize(deserializer)? {
        Some(Erro::Flag(flag)) => flag,
        Some(Erro::Text(text)) => !text.is_empty(),
        None => false,
    })
}

/// Response shape of the ViaCEP `/{cep}/json/` endpoint
#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default, deserialize_with = "deserialize_erro")]
    erro: bool,
}

/// Implementation of the postal-code lookup against viacep.com.br
pub struct ViaCepClient {
    http: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: String) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CepClient for ViaCepClient {
    async fn lookup_address(&self, cep: &str) -> Result<CepAddress, LookupError> {
        if !zipcode::is_valid(cep) {
            return Err(LookupError::InvalidZipCode);
        }

        tracing::debug!(cep, "querying ViaCEP");

        let response = self
            .http
            .get(format!("{}/{}/json/", self.base_url, cep))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Deserialization(e.to_string()))?;

        if body.erro {
            return Err(LookupError::ZipCodeNotFound);
        }

        Ok(CepAddress {
            cep: zipcode::normalize(&body.cep),
            logradouro: body.logradouro,
            complemento: body.complemento,
            bairro: body.bairro,
            localidade: body.localidade,
            uf: body.uf,
        })
    }
}
