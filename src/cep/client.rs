//! HTTP client for the ViaCEP address lookup service

use super::traits::CepResolver;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default ViaCEP endpoint
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Default request timeout for the lookup call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The two address fields the form derives from a CEP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub logradouro: String,
    pub cidade: String,
}

/// Lookup failure taxonomy. Display strings are the user-facing messages.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Well-formed CEP that the service does not know
    #[error("CEP não encontrado")]
    NotFound,
    /// Transport or decode failure talking to the service
    #[error("Erro ao obter dados do CEP")]
    Transport(#[from] reqwest::Error),
}

/// Raw ViaCEP response body.
///
/// The service signals an unknown CEP either with an `erro` marker or by
/// omitting the address fields, so both are kept optional here.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
}

impl ViaCepResponse {
    fn into_address(self) -> Result<Address, LookupError> {
        if self.erro.is_some() {
            return Err(LookupError::NotFound);
        }
        match (self.logradouro, self.localidade) {
            (Some(logradouro), Some(localidade))
                if !logradouro.is_empty() && !localidade.is_empty() =>
            {
                Ok(Address {
                    logradouro,
                    cidade: localidade,
                })
            }
            _ => Err(LookupError::NotFound),
        }
    }
}

/// Client for the ViaCEP address lookup service
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client against a given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep)
    }
}

#[async_trait]
impl CepResolver for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Address, LookupError> {
        let url = self.lookup_url(cep);
        tracing::debug!(%url, "consultando CEP");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: ViaCepResponse = response.json().await?;
        body.into_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> ViaCepResponse {
        serde_json::from_str(json).expect("fixture parses")
    }

    #[test]
    fn test_found_response_yields_address() {
        let body = parse(
            r#"{
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }"#,
        );
        let address = body.into_address().expect("address");
        assert_eq!(
            address,
            Address {
                logradouro: "Avenida Paulista".to_string(),
                cidade: "São Paulo".to_string(),
            }
        );
    }

    #[test]
    fn test_erro_marker_is_not_found() {
        // Current API returns a boolean, older deployments a string
        for body in [r#"{"erro": true}"#, r#"{"erro": "true"}"#] {
            assert!(matches!(
                parse(body).into_address(),
                Err(LookupError::NotFound)
            ));
        }
    }

    #[test]
    fn test_missing_fields_are_not_found() {
        for body in [
            r#"{}"#,
            r#"{"logradouro": "Avenida Paulista"}"#,
            r#"{"localidade": "São Paulo"}"#,
            r#"{"logradouro": "", "localidade": "São Paulo"}"#,
        ] {
            assert!(matches!(
                parse(body).into_address(),
                Err(LookupError::NotFound)
            ));
        }
    }

    #[test]
    fn test_lookup_url_shape() {
        let client = ViaCepClient::new("https://viacep.com.br/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.lookup_url("01310100"),
            "https://viacep.com.br/ws/01310100/json/"
        );
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(LookupError::NotFound.to_string(), "CEP não encontrado");
    }
}
