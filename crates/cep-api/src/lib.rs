//! # cep-api: Axum Service for ConsultaCEP Verification
//!
//! Exposes ViaCEP postal-code lookups as a pluggable "type verification"
//! service for a form-automation platform.
//!
//! ## API Surface
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `POST` | `/?action=...` | Action-routed handlers, see [`routes`] |
//! | `GET` | `/` | Plain-text `OK` |
//! | `GET` | `/health/liveness` | Kubernetes liveness probe |
//! | `GET` | `/health/readiness` | Kubernetes readiness probe |
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CatchPanicLayer
//!
//! ## Crate Policy
//!
//! - Handlers hold no state between requests; [`AppState`] is immutable.
//! - ViaCEP is reached only through `cep-viacep-client`.
//! - Routing and token errors map to flat JSON via [`AppError`];
//!   verification outcomes always use the verification contract.

pub mod action;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::Router;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(routes::router())
        .with_state(state)
        .merge(health)
        .layer(middleware::panic::layer())
        .layer(middleware::tracing_layer::layer())
}

/// Liveness probe. 200 while the process runs.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. No dependencies are checked.
async fn readiness() -> &'static str {
    "ready"
}
