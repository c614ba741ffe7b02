//! # Middleware Stack
//!
//! TraceLayer → CatchPanicLayer → router. Every request gets a span; a
//! panicking handler still answers with a well-formed `INTERNAL_ERROR`
//! verification body.

pub mod panic;
pub mod tracing_layer;
