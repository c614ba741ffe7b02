//! # Error Types
//!
//! Validation failures for domain primitives, built with `thiserror`.

use thiserror::Error;

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// CEP does not reduce to exactly 8 digits.
    #[error("invalid CEP: \"{raw}\" has {digits} digit(s), expected 8")]
    InvalidCep {
        /// The value as the caller supplied it.
        raw: String,
        /// Number of digits found after stripping everything else.
        digits: usize,
    },
}
