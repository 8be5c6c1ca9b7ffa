use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::common::models::{Address, LookupOutcome};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid lookup url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lookup service answered with HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Resolves a postal code into an address.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(&self, code: &str) -> Result<LookupOutcome, LookupError>;
}

/// A lookup issued by the page, tagged with its request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: u64,
    pub code: String,
}

/// Result of a lookup, delivered back to the page state.
///
/// The error is shared so the reply can travel inside GUI messages.
#[derive(Debug, Clone)]
pub struct LookupReply {
    pub id: u64,
    pub code: String,
    pub result: Result<LookupOutcome, Arc<LookupError>>,
}

pub async fn run_lookup(lookup: Arc<dyn AddressLookup>, request: LookupRequest) -> LookupReply {
    let result = lookup.lookup(&request.code).await.map_err(Arc::new);
    LookupReply {
        id: request.id,
        code: request.code,
        result,
    }
}

pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().build()?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, LookupError> {
        // Url::join would drop the last path segment without the trailing slash
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        Ok(Self { http, base_url })
    }

    /// `{base}/ws/{code}/json/`, with the code passed as the mask produced it.
    pub fn endpoint(&self, code: &str) -> Result<Url, LookupError> {
        Ok(self.base_url.join(&format!("ws/{}/json/", code))?)
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, code: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.endpoint(code)?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        parse_lookup_body(&body)
    }
}

/// Decodes a ViaCEP body. `{"erro": true}` means the code does not exist;
/// newer deployments send the flag as the string `"true"`.
pub fn parse_lookup_body(body: &[u8]) -> Result<LookupOutcome, LookupError> {
    let value: Value = serde_json::from_slice(body)?;
    let not_found = match value.get("erro") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag == "true",
        _ => false,
    };
    if not_found {
        return Ok(LookupOutcome::NotFound);
    }
    let address: Address = serde_json::from_value(value)?;
    Ok(LookupOutcome::Found(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_the_masked_code() {
        let client = ViaCepClient::new("https://viacep.com.br").unwrap();
        assert_eq!(
            client.endpoint("01310-100").unwrap().as_str(),
            "https://viacep.com.br/ws/01310-100/json/"
        );
    }

    #[test]
    fn endpoint_preserves_base_path() {
        let client = ViaCepClient::new("http://127.0.0.1:8080/proxy").unwrap();
        assert_eq!(
            client.endpoint("0131").unwrap().as_str(),
            "http://127.0.0.1:8080/proxy/ws/0131/json/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(ViaCepClient::new("not a url"), Err(LookupError::InvalidUrl(_))));
    }

    #[test]
    fn erro_flag_means_not_found() {
        assert_eq!(parse_lookup_body(br#"{"erro": true}"#).unwrap(), LookupOutcome::NotFound);
        assert_eq!(parse_lookup_body(br#"{"erro": "true"}"#).unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn address_payload_is_kept_verbatim() {
        let body = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "estado": "São Paulo",
            "regiao": "Sudeste",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#
        .as_bytes();
        let LookupOutcome::Found(address) = parse_lookup_body(body).unwrap() else {
            panic!("expected an address");
        };
        assert_eq!(address.complemento, "de 612 a 1510 - lado par");
        assert_eq!(address.localidade, "São Paulo");
        assert_eq!(address.siafi, "7107");
        assert_eq!(address.unidade, "");
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert!(matches!(parse_lookup_body(b"<html>"), Err(LookupError::Decode(_))));
        assert!(matches!(parse_lookup_body(b"[1, 2]"), Err(LookupError::Decode(_))));
    }
}
