//! # CEP (Código de Endereçamento Postal)
//!
//! Brazilian postal code newtype. Canonically written `NNNNN-NNN`, stored
//! here as the bare 8-digit string.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of digits in a valid CEP.
pub const CEP_DIGITS: usize = 8;

/// Strip every character that is not an ASCII digit.
///
/// Callers send codes in whatever shape their form produced (`01001-000`,
/// `01.001-000`, ` 01001000 `), so punctuation and whitespace are dropped
/// rather than rejected.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A validated Brazilian postal code.
///
/// # Validation
///
/// - Every non-digit character is removed first
/// - Exactly 8 digits must remain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// Create a CEP from a raw value, validating the digit count.
    ///
    /// Accepts `"01001000"`, `"01001-000"`, and any other spelling that
    /// reduces to 8 digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCep`] if the digit count is not 8.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = digits_only(&raw);
        if digits.len() != CEP_DIGITS {
            return Err(ValidationError::InvalidCep {
                digits: digits.len(),
                raw,
            });
        }
        Ok(Self(digits))
    }

    /// Access the CEP as its 8 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CEP in formatted form: NNNNN-NNN.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<String> for Cep {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.0
    }
}

impl std::str::FromStr for Cep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_bare_digits() {
        let cep = Cep::new("01001000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
    }

    #[test]
    fn accepts_formatted_input() {
        let cep = Cep::new("01001-000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
        assert_eq!(cep.formatted(), "01001-000");
    }

    #[test]
    fn strips_dots_and_whitespace() {
        let cep = Cep::new(" 01.001-000 ").unwrap();
        assert_eq!(cep.as_str(), "01001000");
    }

    #[test]
    fn rejects_short_code() {
        let err = Cep::new("123").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCep {
                raw: "123".into(),
                digits: 3
            }
        );
    }

    #[test]
    fn rejects_long_code() {
        assert!(Cep::new("010010001").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(Cep::new("").is_err());
    }

    #[test]
    fn non_ascii_digits_do_not_count() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(Cep::new("٠١٠٠١٠٠٠").is_err());
    }

    #[test]
    fn display_uses_formatted_form() {
        let cep = Cep::new("70040010").unwrap();
        assert_eq!(cep.to_string(), "70040-010");
    }

    #[test]
    fn serde_round_trips_through_digits() {
        let cep: Cep = serde_json::from_str("\"01001-000\"").unwrap();
        assert_eq!(serde_json::to_string(&cep).unwrap(), "\"01001000\"");
        assert!(serde_json::from_str::<Cep>("\"12\"").is_err());
    }

    proptest! {
        /// Any input whose digit-only form is not 8 long is rejected.
        #[test]
        fn wrong_digit_count_is_always_rejected(raw in "[0-9a-zA-Z .\\-]{0,20}") {
            let digits = digits_only(&raw);
            prop_assume!(digits.len() != CEP_DIGITS);
            prop_assert!(Cep::new(raw).is_err());
        }

        /// Any 8 digits survive arbitrary punctuation between them.
        #[test]
        fn eight_digits_are_always_accepted(digits in "[0-9]{8}", sep in "[ .\\-]{0,3}") {
            let raw = format!("{}{}{}", &digits[..5], sep, &digits[5..]);
            let cep = Cep::new(raw).unwrap();
            prop_assert_eq!(cep.as_str(), digits.as_str());
        }
    }
}
