//! # Panic Boundary
//!
//! Converts a handler panic into HTTP 500 with an `INTERNAL_ERROR`
//! verification body, so the transport never sees a dropped connection.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cep_core::VerificationResponse;
use tower_http::catch_panic::CatchPanicLayer;

/// Panic handler signature expected by [`CatchPanicLayer::custom`].
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Build the panic-catching layer.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

/// Render a caught panic.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(%detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(VerificationResponse::handler_failure(detail)),
    )
        .into_response()
}
