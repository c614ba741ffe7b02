//! # Route Handlers
//!
//! One endpoint, `POST /`, routed by the `action` parameter:
//!
//! | `action` | Module | Purpose |
//! |----------|--------|---------|
//! | `oauthToken` | [`token`] | Placeholder client-credentials token |
//! | `getTypeNames` | [`types`] | List verifiable types |
//! | `getTypeDefinitions` | [`types`] | Property schema per type |
//! | `verify` | [`verify`] | CEP lookup via ViaCEP |
//!
//! Anything else answers 400 `{error: "Unknown action", actionReceived}`.

pub mod token;
pub mod types;
pub mod verify;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use crate::action::Action;
use crate::error::AppError;
use crate::extractors::RequestParams;
use crate::state::AppState;

/// Build the action-routed verification router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(dispatch).get(root))
}

/// Plain-text `OK` for platform reachability checks.
async fn root() -> &'static str {
    "OK"
}

/// Select exactly one handler from the `action` parameter.
async fn dispatch(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = RequestParams::collect(query.as_deref(), &headers, &body);
    let received = params.get("action").unwrap_or_default().to_string();

    let Some(action) = Action::parse(&received) else {
        return AppError::UnknownAction(received).into_response();
    };
    tracing::debug!(%action, "dispatching");

    match action {
        Action::OauthToken => token::issue(&state, &params).into_response(),
        Action::GetTypeNames => types::type_names().into_response(),
        Action::GetTypeDefinitions => types::type_definitions(&body).into_response(),
        Action::Verify => verify::verify(&state, &body).await.into_response(),
    }
}
