//! # Type Catalog Actions
//!
//! `getTypeNames` and `getTypeDefinitions`. Pure metadata from
//! [`cep_core::catalog`]; no I/O and no failure path.

use axum::Json;
use cep_core::catalog::{self, TypeDefinition, TypeNameEntry, TypeNameRef};
use serde::Serialize;
use serde_json::Value;

use crate::extractors::parse_json_body;

/// `getTypeNames` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNamesResponse {
    pub type_names: Vec<TypeNameEntry>,
}

/// `getTypeDefinitions` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionsResponse {
    pub type_definitions: Vec<TypeDefinition>,
}

/// List every verifiable type.
pub fn type_names() -> Json<TypeNamesResponse> {
    Json(TypeNamesResponse {
        type_names: catalog::type_names(),
    })
}

/// Return definitions for the types named in the body's `typeNames`.
///
/// A body that is absent, unparseable, or lacks `typeNames` is a request for
/// every supported type.
pub fn type_definitions(body: &[u8]) -> Json<TypeDefinitionsResponse> {
    let requested = parse_json_body(body)
        .ok()
        .and_then(|v| requested_type_names(&v));
    Json(TypeDefinitionsResponse {
        type_definitions: catalog::definitions_for(requested.as_deref()),
    })
}

/// `None` only when `typeNames` is absent. A single string or object is one
/// reference; any other present value names nothing.
fn requested_type_names(body: &Value) -> Option<Vec<TypeNameRef>> {
    let refs: Vec<TypeNameRef> = match body.get("typeNames")? {
        Value::Array(items) => items.iter().cloned().filter_map(type_name_ref).collect(),
        single @ (Value::String(_) | Value::Object(_)) => {
            type_name_ref(single.clone()).into_iter().collect()
        }
        _ => Vec::new(),
    };
    Some(refs)
}

fn type_name_ref(value: Value) -> Option<TypeNameRef> {
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_of_mixed_refs() {
        let refs = requested_type_names(&json!({"typeNames": ["A", {"typeName": "B"}]})).unwrap();
        let names: Vec<_> = refs.iter().filter_map(|r| r.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn bare_string_is_single_ref() {
        let refs = requested_type_names(&json!({"typeNames": "ConsultaCEP"})).unwrap();
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn single_object_is_single_ref() {
        let refs = requested_type_names(&json!({"typeNames": {"typeName": "Endereco"}})).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name(), Some("Endereco"));
    }

    #[test]
    fn present_non_list_values_name_nothing() {
        for body in [
            br#"{"typeNames": null}"#.as_slice(),
            br#"{"typeNames": 42}"#.as_slice(),
            br#"{"typeNames": true}"#.as_slice(),
            br#"{"typeNames": {"typeName": "Endereco"}}"#.as_slice(),
        ] {
            assert!(type_definitions(body).0.type_definitions.is_empty());
        }
    }

    #[test]
    fn single_supported_object_yields_definition() {
        let resp = type_definitions(br#"{"typeNames": {"typeName": "ConsultaCEP"}}"#);
        assert_eq!(resp.0.type_definitions.len(), 1);
    }

    #[test]
    fn missing_member_means_everything() {
        assert!(requested_type_names(&json!({})).is_none());
        assert_eq!(type_definitions(b"").0.type_definitions.len(), 1);
    }

    #[test]
    fn unparseable_body_means_everything() {
        assert_eq!(type_definitions(b"{oops").0.type_definitions.len(), 1);
    }

    #[test]
    fn unsupported_names_yield_nothing() {
        let resp = type_definitions(br#"{"typeNames": ["Endereco"]}"#);
        assert!(resp.0.type_definitions.is_empty());
    }
}
