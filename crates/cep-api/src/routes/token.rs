//! # Token Action
//!
//! A trivial client-credentials flow. No caller identity is checked: any
//! request naming the action receives the configured placeholder token.
//! Real access control, if ever needed, belongs in a dedicated credential
//! service in front of this adapter.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::RequestParams;
use crate::state::AppState;

/// The only grant type this endpoint understands.
pub const CLIENT_CREDENTIALS: &str = "client_credentials";

/// Token lifetime advertised to the caller, in seconds.
pub const EXPIRES_IN_SECS: u64 = 3600;

/// Bearer token response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Issue the placeholder token.
///
/// A missing or empty `grant_type` is treated as `client_credentials`.
pub fn issue(state: &AppState, params: &RequestParams) -> Result<Json<TokenResponse>, AppError> {
    match params.get("grant_type") {
        Some(grant) if !grant.is_empty() && grant != CLIENT_CREDENTIALS => {
            Err(AppError::UnsupportedGrantType(grant.to_string()))
        }
        _ => Ok(Json(TokenResponse {
            access_token: state.config.access_token.clone(),
            token_type: "Bearer".to_string(),
            expires_in: EXPIRES_IN_SECS,
        })),
    }
}
