//! # API Error Types
//!
//! Protocol-level errors implementing `axum::response::IntoResponse`.
//!
//! These are the flat `{error, ...}` bodies the form platform expects for
//! routing and token failures. Verification outcomes never pass through
//! here; they travel in the `verificationResultCode` of a
//! [`cep_core::VerificationResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Body for an unrecognized action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownActionBody {
    pub error: &'static str,
    pub action_received: String,
}

/// OAuth-style error body.
#[derive(Debug, Serialize)]
pub struct OAuthErrorBody {
    pub error: &'static str,
    pub error_description: &'static str,
}

/// Application-level error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The `action` parameter named no known handler (400).
    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    /// `grant_type` was supplied and is not `client_credentials` (400).
    #[error("unsupported grant type: {0:?}")]
    UnsupportedGrantType(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedGrantType(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(error = %self, "rejected request");

        match self {
            Self::UnknownAction(received) => (
                status,
                Json(UnknownActionBody {
                    error: "Unknown action",
                    action_received: received,
                }),
            )
                .into_response(),
            Self::UnsupportedGrantType(_) => (
                status,
                Json(OAuthErrorBody {
                    error: "unsupported_grant_type",
                    error_description: "Only client_credentials is supported",
                }),
            )
                .into_response(),
        }
    }
}
