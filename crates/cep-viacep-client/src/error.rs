//! ViaCEP client error types.

/// Errors from ViaCEP lookups.
#[derive(Debug, thiserror::Error)]
pub enum ViaCepError {
    /// HTTP transport error (connection, TLS, timeout, body read).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// ViaCEP returned a non-2xx status.
    #[error("ViaCEP {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body was not JSON.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Response body was JSON but not an object.
    #[error("unexpected response from {endpoint}: expected a JSON object, got {found}")]
    UnexpectedShape {
        endpoint: String,
        found: &'static str,
    },
}

impl ViaCepError {
    /// The upstream HTTP status, when ViaCEP answered with a non-2xx code.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
