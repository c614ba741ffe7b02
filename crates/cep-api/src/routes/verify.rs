//! # Verify Action
//!
//! The verification pipeline. Each step is a hard boundary with its own
//! outcome:
//!
//! 1. Parse `data.cep` from the body and strip non-digits
//! 2. Reject anything that is not 8 digits (no outbound call)
//! 3. Look the code up on ViaCEP, exactly once
//! 4. Classify: non-2xx, not found, or found
//!
//! Every other failure becomes `INTERNAL_ERROR` with HTTP 500.

use axum::http::StatusCode;
use axum::Json;
use cep_core::loose::loose_string;
use cep_core::{Cep, VerificationResponse};
use cep_viacep_client::{LookupOutcome, ViaCepError};
use serde_json::Value;

use crate::extractors::parse_json_body;
use crate::state::AppState;

/// Failures that abort the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum VerifyFailure {
    /// The body looked like JSON but did not parse.
    #[error("invalid JSON body: {0}")]
    Body(#[from] serde_json::Error),
    /// ViaCEP could not be reached or answered with an unusable body.
    #[error(transparent)]
    Lookup(#[from] ViaCepError),
}

/// Run the pipeline and render its outcome.
pub async fn verify(state: &AppState, body: &[u8]) -> (StatusCode, Json<VerificationResponse>) {
    match run(state, body).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(failure) => {
            tracing::error!(error = %failure, "verify failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VerificationResponse::internal(failure.to_string())),
            )
        }
    }
}

async fn run(state: &AppState, body: &[u8]) -> Result<VerificationResponse, VerifyFailure> {
    let request = parse_json_body(body)?;
    let raw_cep = raw_cep(&request);

    let cep = match Cep::new(raw_cep.as_str()) {
        Ok(cep) => cep,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting CEP before lookup");
            return Ok(VerificationResponse::invalid_cep(&raw_cep));
        }
    };

    match state.viacep.lookup(&cep).await {
        Ok(LookupOutcome::Found(address)) => Ok(VerificationResponse::success(&raw_cep, &address)),
        Ok(LookupOutcome::NotFound) => Ok(VerificationResponse::not_found(&raw_cep)),
        Err(e) => match e.upstream_status() {
            Some(status) => Ok(VerificationResponse::upstream_status(&raw_cep, status)),
            None => Err(e.into()),
        },
    }
}

/// `data.cep` as the caller sent it, coerced to a string.
fn raw_cep(request: &Value) -> String {
    request
        .get("data")
        .and_then(|data| data.get("cep"))
        .map(loose_string)
        .unwrap_or_default()
}
