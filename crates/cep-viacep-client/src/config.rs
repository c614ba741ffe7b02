//! ViaCEP client configuration.
//!
//! Defaults point to the public ViaCEP endpoint. Override via environment
//! variables or explicit construction for testing.

use url::Url;

/// Public ViaCEP web-service root.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws/";

/// Configuration for connecting to ViaCEP.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Service root; lookups go to `{base_url}/{cep}/json/`.
    /// Default: <https://viacep.com.br/ws/>
    pub base_url: Url,
    /// Request timeout in seconds. `None` keeps reqwest's default (no
    /// client-side timeout).
    pub timeout_secs: Option<u64>,
}

impl ViaCepConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `VIACEP_BASE_URL` (default: `https://viacep.com.br/ws/`)
    /// - `VIACEP_TIMEOUT_SECS` (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match std::env::var("VIACEP_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            base_url: env_url("VIACEP_BASE_URL", DEFAULT_BASE_URL)?,
            timeout_secs,
        })
    }

    /// Create a configuration pointing at an explicit service root, such as
    /// a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            timeout_secs: None,
        })
    }

    /// Set a request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("VIACEP_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}
