//! # cep-viacep-client -- Typed Rust client for ViaCEP
//!
//! ViaCEP resolves a Brazilian postal code to a street address:
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | GET | `/ws/{8 digits}/json/` | address object, or `{"erro": true}` |
//!
//! ## Architecture
//!
//! This crate is the only path from the adapter to ViaCEP. It accepts only a
//! validated [`Cep`], so malformed codes never reach the network.
//!
//! ## Retry & Caching
//!
//! Neither. Each [`ViaCepClient::lookup`] issues exactly one request; a
//! failure is returned to the caller as-is.

pub mod config;
pub mod error;

pub use config::ViaCepConfig;
pub use error::ViaCepError;

use std::time::Duration;

use cep_core::{loose, Address, Cep};

/// Result of a lookup that reached ViaCEP and got a 2xx answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The code resolved to an address.
    Found(Address),
    /// ViaCEP flagged the code as unknown (`erro` present and truthy).
    NotFound,
}

/// ViaCEP client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ViaCepClient {
    /// Create a new ViaCEP client from configuration.
    pub fn new(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        let mut builder = reqwest::Client::builder().default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ViaCepError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Look up a postal code.
    ///
    /// Calls `GET {base_url}/{digits}/json/`.
    pub async fn lookup(&self, cep: &Cep) -> Result<LookupOutcome, ViaCepError> {
        let endpoint = format!("GET /{}/json/", cep.as_str());
        let url = format!(
            "{}/{}/json/",
            self.base_url.as_str().trim_end_matches('/'),
            cep.as_str()
        );

        tracing::debug!(cep = %cep, %url, "looking up CEP");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ViaCepError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(cep = %cep, status, "ViaCEP returned non-success status");
            return Err(ViaCepError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        let text = resp.text().await.map_err(|e| ViaCepError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        let payload: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ViaCepError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        parse_payload(&endpoint, &payload)
    }
}

fn parse_payload(
    endpoint: &str,
    payload: &serde_json::Value,
) -> Result<LookupOutcome, ViaCepError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ViaCepError::UnexpectedShape {
            endpoint: endpoint.to_string(),
            found: json_kind(payload),
        })?;

    if object.get("erro").is_some_and(loose::is_truthy) {
        return Ok(LookupOutcome::NotFound);
    }
    Ok(LookupOutcome::Found(Address::from_json_object(object)))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
