#![deny(missing_docs)]

//! # cep-core: Domain Types for the ConsultaCEP Adapter
//!
//! Foundational types shared by the ViaCEP client and the API service.
//! Only `serde`, `serde_json`, and `thiserror` from the external ecosystem;
//! no I/O happens in this crate.
//!
//! ## Design Principles
//!
//! 1. **[`Cep`] is the sole path to an outbound lookup.** A postal code that
//!    has not been reduced to exactly 8 digits cannot be represented, so the
//!    client can never be handed an unvalidated value.
//!
//! 2. **One property table.** [`catalog::CONSULTA_CEP_PROPERTIES`] is read by
//!    both the type-name listing and the type-definition operations.
//!
//! 3. **Loose coercion lives in one place.** The platform sends loosely typed
//!    JSON; [`loose`] holds the string/truthiness rules every caller applies.

pub mod address;
pub mod catalog;
pub mod cep;
pub mod error;
pub mod loose;
pub mod verification;

pub use address::Address;
pub use catalog::{PropertySpec, TypeDefinition, TypeNameEntry, CONSULTA_CEP_TYPE_NAME};
pub use cep::Cep;
pub use error::ValidationError;
pub use verification::{Suggestion, VerificationResponse, VerificationResultCode};
