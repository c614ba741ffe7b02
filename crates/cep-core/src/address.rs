//! # Address Record
//!
//! The address fields a successful postal-code lookup yields. Every field is
//! a plain string; fields the upstream omits are empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::loose::loose_field;

/// Address returned by a postal-code lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code as the upstream formats it (usually `NNNNN-NNN`).
    pub cep: String,
    /// Street.
    pub logradouro: String,
    /// Complement (e.g. "lado ímpar").
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
}

impl Address {
    /// Build an address from a loosely typed JSON object.
    ///
    /// Missing, null, or non-string members become empty strings; numbers
    /// become their decimal text.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        Self {
            cep: loose_field(object, "cep"),
            logradouro: loose_field(object, "logradouro"),
            complemento: loose_field(object, "complemento"),
            bairro: loose_field(object, "bairro"),
            localidade: loose_field(object, "localidade"),
            uf: loose_field(object, "uf"),
            estado: loose_field(object, "estado"),
            regiao: loose_field(object, "regiao"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_every_field() {
        let body = json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "estado": "São Paulo",
            "regiao": "Sudeste",
            "ibge": "3550308"
        });
        let addr = Address::from_json_object(body.as_object().unwrap());
        assert_eq!(addr.logradouro, "Praça da Sé");
        assert_eq!(addr.complemento, "lado ímpar");
        assert_eq!(addr.bairro, "Sé");
        assert_eq!(addr.localidade, "São Paulo");
        assert_eq!(addr.uf, "SP");
        assert_eq!(addr.estado, "São Paulo");
        assert_eq!(addr.regiao, "Sudeste");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let body = json!({"localidade": "Brasília", "bairro": null});
        let addr = Address::from_json_object(body.as_object().unwrap());
        assert_eq!(addr.localidade, "Brasília");
        assert_eq!(addr.bairro, "");
        assert_eq!(addr.logradouro, "");
        assert_eq!(addr.regiao, "");
    }
}
