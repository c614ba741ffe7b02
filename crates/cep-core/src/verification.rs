//! # Verification Result Contract
//!
//! The response shape the form-automation platform expects from a `verify`
//! call. Each outcome of the verification pipeline has one constructor here,
//! so messages and codes stay consistent across handlers.
//!
//! | Outcome | Code | `verified` | Suggestions |
//! |---------|------|-----------|-------------|
//! | Address found | `SUCCESS` | true | one, filled |
//! | Bad digit count | `VALIDATION_ERRORS` | false | one, echo |
//! | Upstream "not found" | `VALIDATION_ERRORS` | false | one, echo |
//! | Upstream non-2xx | `EXTERNAL_SERVICE_ERROR` | false | one, echo |
//! | Anything else | `INTERNAL_ERROR` | false | none |

use serde::{Deserialize, Serialize};

use crate::address::Address;

const MSG_OK: &str = "OK";
const MSG_INVALID_CEP: &str = "CEP inválido (precisa ter 8 dígitos).";
const REASON_INVALID_CEP: &str = "CEP inválido.";
const MSG_NOT_FOUND: &str = "CEP não encontrado.";
const REASON_UPSTREAM: &str = "Falha ao consultar ViaCEP.";
const MSG_INTERNAL: &str = "Erro interno no verify.";
const MSG_HANDLER_FAILURE: &str = "Erro interno (handler).";

/// Machine-readable verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationResultCode {
    /// The postal code resolved to an address.
    Success,
    /// Caller input is malformed or unknown upstream. Resubmitting a
    /// corrected code recovers.
    ValidationErrors,
    /// The lookup service answered with a non-success status. Retrying
    /// later may recover.
    ExternalServiceError,
    /// Any unexpected failure.
    InternalError,
}

impl VerificationResultCode {
    /// Return the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ValidationErrors => "VALIDATION_ERRORS",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for VerificationResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate record returned by a verification call.
///
/// `cidade` and `estadoSigla` mirror `localidade` and `uf` for platform
/// forms configured with the alternate names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The postal code exactly as the caller sent it.
    pub cep: String,
    /// Street.
    pub logradouro: String,
    /// Complement.
    pub complemento: String,
    /// Neighborhood.
    pub bairro: String,
    /// City.
    pub localidade: String,
    /// State abbreviation.
    pub uf: String,
    /// State name.
    pub estado: String,
    /// Region name.
    pub regiao: String,
    /// Alias of `localidade`.
    pub cidade: String,
    /// Alias of `uf`.
    pub estado_sigla: String,
}

impl Suggestion {
    /// A suggestion that only echoes the caller's input.
    pub fn echo(raw_cep: &str) -> Self {
        Self {
            cep: raw_cep.to_string(),
            ..Self::default()
        }
    }

    /// A suggestion filled from a lookup result. `cep` still echoes the
    /// caller's input, not the upstream's formatting.
    pub fn from_address(raw_cep: &str, address: &Address) -> Self {
        Self {
            cep: raw_cep.to_string(),
            logradouro: address.logradouro.clone(),
            complemento: address.complemento.clone(),
            bairro: address.bairro.clone(),
            localidade: address.localidade.clone(),
            uf: address.uf.clone(),
            estado: address.estado.clone(),
            regiao: address.regiao.clone(),
            cidade: address.localidade.clone(),
            estado_sigla: address.uf.clone(),
        }
    }
}

/// Verification response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    /// Whether the postal code was verified.
    pub verified: bool,
    /// Human-readable outcome.
    pub verify_response_message: String,
    /// Short failure reason; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_failure_reason: Option<String>,
    /// Machine-readable outcome.
    pub verification_result_code: VerificationResultCode,
    /// Outcome description; present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_result_description: Option<String>,
    /// Candidate records. Empty only for [`VerificationResultCode::InternalError`].
    pub suggestions: Vec<Suggestion>,
}

impl VerificationResponse {
    /// The postal code resolved to `address`.
    pub fn success(raw_cep: &str, address: &Address) -> Self {
        Self {
            verified: true,
            verify_response_message: MSG_OK.to_string(),
            verify_failure_reason: None,
            verification_result_code: VerificationResultCode::Success,
            verification_result_description: Some(MSG_OK.to_string()),
            suggestions: vec![Suggestion::from_address(raw_cep, address)],
        }
    }

    /// The input does not reduce to 8 digits.
    pub fn invalid_cep(raw_cep: &str) -> Self {
        Self::rejected(
            raw_cep,
            VerificationResultCode::ValidationErrors,
            MSG_INVALID_CEP.to_string(),
            REASON_INVALID_CEP,
        )
    }

    /// The lookup service reported the code as unknown.
    pub fn not_found(raw_cep: &str) -> Self {
        Self::rejected(
            raw_cep,
            VerificationResultCode::ValidationErrors,
            MSG_NOT_FOUND.to_string(),
            MSG_NOT_FOUND,
        )
    }

    /// The lookup service answered with HTTP `status`.
    pub fn upstream_status(raw_cep: &str, status: u16) -> Self {
        Self::rejected(
            raw_cep,
            VerificationResultCode::ExternalServiceError,
            format!("Falha ao consultar ViaCEP (HTTP {status})."),
            REASON_UPSTREAM,
        )
    }

    /// Unexpected failure in the verification pipeline; `reason` carries
    /// the underlying error text.
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::failed(MSG_INTERNAL, reason.into())
    }

    /// Unexpected failure outside any pipeline step, such as a handler
    /// panic caught at the service boundary.
    pub fn handler_failure(reason: impl Into<String>) -> Self {
        Self::failed(MSG_HANDLER_FAILURE, reason.into())
    }

    fn failed(message: &str, reason: String) -> Self {
        Self {
            verified: false,
            verify_response_message: message.to_string(),
            verify_failure_reason: Some(reason),
            verification_result_code: VerificationResultCode::InternalError,
            verification_result_description: None,
            suggestions: Vec::new(),
        }
    }

    fn rejected(
        raw_cep: &str,
        code: VerificationResultCode,
        message: String,
        reason: &str,
    ) -> Self {
        Self {
            verified: false,
            verify_response_message: message,
            verify_failure_reason: Some(reason.to_string()),
            verification_result_code: code,
            verification_result_description: None,
            suggestions: vec![Suggestion::echo(raw_cep)],
        }
    }
}
