//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Immutable after startup: the configuration
//! and one ViaCEP client whose connection pool is shared across requests.

use std::sync::Arc;

use cep_viacep_client::ViaCepClient;

/// Placeholder bearer token handed out by the `oauthToken` action.
///
/// The adapter performs no real authentication; any caller that names the
/// action receives this value unless the operator overrides it.
pub const DEFAULT_ACCESS_TOKEN: &str = "9f3c1c2a-6f7e-4c1d-9b8a-2e5d8a0f6c47";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Bearer token returned by the `oauthToken` action.
    pub access_token: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process configuration.
    pub config: Arc<AppConfig>,
    /// ViaCEP client used by the `verify` action.
    pub viacep: ViaCepClient,
}

impl AppState {
    /// Create application state from configuration and a ViaCEP client.
    pub fn new(config: AppConfig, viacep: ViaCepClient) -> Self {
        Self {
            config: Arc::new(config),
            viacep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let config = AppConfig {
            port: 8080,
            access_token: "super-secret".into(),
        };
        let out = format!("{config:?}");
        assert!(out.contains("8080"));
        assert!(out.contains("[REDACTED]"));
        assert!(!out.contains("super-secret"));
    }

    #[test]
    fn default_uses_placeholder_token() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.access_token, DEFAULT_ACCESS_TOKEN);
    }
}
