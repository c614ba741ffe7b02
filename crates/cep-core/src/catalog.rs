//! # Verifiable Type Catalog
//!
//! Static declaration of the single type this adapter can verify,
//! `ConsultaCEP`, and its property schema. The schema is one table,
//! [`CONSULTA_CEP_PROPERTIES`], consumed by both the type-name listing and
//! the type-definition operations.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Name of the only verifiable type.
pub const CONSULTA_CEP_TYPE_NAME: &str = "ConsultaCEP";

const CONSULTA_CEP_LABEL: &str = "Consulta CEP";
const CONSULTA_CEP_DESCRIPTION: &str =
    "Consulta CEP via ViaCEP e preenche logradouro, bairro, cidade e estado";

/// One row of the property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Semantic name, as it appears in requests and suggestions.
    pub name: &'static str,
    /// Display label for the platform's form designer.
    pub label: &'static str,
    /// Whether the platform must send this property to verify.
    pub required: bool,
    /// Maximum string length.
    pub max_length: u32,
}

/// Property schema of `ConsultaCEP`. Exactly one row is required.
pub const CONSULTA_CEP_PROPERTIES: &[PropertySpec] = &[
    PropertySpec {
        name: "cep",
        label: "CEP",
        required: true,
        max_length: 9,
    },
    PropertySpec {
        name: "logradouro",
        label: "Logradouro",
        required: false,
        max_length: 255,
    },
    PropertySpec {
        name: "complemento",
        label: "Complemento",
        required: false,
        max_length: 255,
    },
    PropertySpec {
        name: "bairro",
        label: "Bairro",
        required: false,
        max_length: 255,
    },
    PropertySpec {
        name: "localidade",
        label: "Localidade",
        required: false,
        max_length: 255,
    },
    PropertySpec {
        name: "uf",
        label: "UF",
        required: false,
        max_length: 2,
    },
    PropertySpec {
        name: "estado",
        label: "Estado",
        required: false,
        max_length: 100,
    },
    PropertySpec {
        name: "regiao",
        label: "Região",
        required: false,
        max_length: 50,
    },
    PropertySpec {
        name: "cidade",
        label: "Cidade",
        required: false,
        max_length: 255,
    },
    PropertySpec {
        name: "estadoSigla",
        label: "Estado (sigla)",
        required: false,
        max_length: 2,
    },
];

/// Entry of the type-name listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNameEntry {
    /// Type name used in definition requests.
    pub type_name: String,
    /// Human label.
    pub label: String,
    /// What verifying this type does.
    pub description: String,
}

/// A requested type name: either a bare string or an object carrying
/// `typeName`. Anything else is accepted and never matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeNameRef {
    /// `"ConsultaCEP"`
    Plain(String),
    /// `{"typeName": "ConsultaCEP"}`
    Named {
        /// The referenced type name.
        #[serde(rename = "typeName")]
        type_name: String,
    },
    /// Any other JSON value.
    Other(serde_json::Value),
}

impl TypeNameRef {
    /// The referenced type name, if this entry carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Plain(name) | Self::Named { type_name: name } => Some(name),
            Self::Other(_) => None,
        }
    }
}

/// Schema of a single property within a [`TypeDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Always `"string"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Display label.
    pub display_name: &'static str,
    /// Maximum string length.
    pub max_length: u32,
    /// Set only on the property required for verification.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required_for_verifying_type: bool,
}

impl From<&PropertySpec> for PropertyDefinition {
    fn from(spec: &PropertySpec) -> Self {
        Self {
            kind: "string",
            display_name: spec.label,
            max_length: spec.max_length,
            required_for_verifying_type: spec.required,
        }
    }
}

/// Property schemas keyed by name, serialized as a JSON object that keeps
/// table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties(Vec<(&'static str, PropertyDefinition)>);

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, def) in &self.0 {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

/// Full declaration of a verifiable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    /// Type name.
    pub type_name: &'static str,
    /// Display label.
    pub display_name: &'static str,
    /// What verifying this type does.
    pub description: &'static str,
    /// Property schema.
    pub properties: Properties,
}

/// Every verifiable type, as listing entries.
pub fn type_names() -> Vec<TypeNameEntry> {
    vec![TypeNameEntry {
        type_name: CONSULTA_CEP_TYPE_NAME.to_string(),
        label: CONSULTA_CEP_LABEL.to_string(),
        description: CONSULTA_CEP_DESCRIPTION.to_string(),
    }]
}

/// The `ConsultaCEP` declaration, built from [`CONSULTA_CEP_PROPERTIES`].
pub fn consulta_cep_definition() -> TypeDefinition {
    TypeDefinition {
        type_name: CONSULTA_CEP_TYPE_NAME,
        display_name: CONSULTA_CEP_LABEL,
        description: CONSULTA_CEP_DESCRIPTION,
        properties: Properties(
            CONSULTA_CEP_PROPERTIES
                .iter()
                .map(|spec| (spec.name, PropertyDefinition::from(spec)))
                .collect(),
        ),
    }
}

/// Definitions for the requested type names.
///
/// `None` means the caller did not name any types and gets every supported
/// definition. Otherwise only supported names present in `requested` are
/// returned, each at most once.
pub fn definitions_for(requested: Option<&[TypeNameRef]>) -> Vec<TypeDefinition> {
    let wanted = match requested {
        None => true,
        Some(refs) => refs
            .iter()
            .any(|r| r.name() == Some(CONSULTA_CEP_TYPE_NAME)),
    };
    if wanted {
        vec![consulta_cep_definition()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exactly_one_required_property() {
        let required: Vec<_> = CONSULTA_CEP_PROPERTIES
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        assert_eq!(required, vec!["cep"]);
    }

    #[test]
    fn listing_names_the_supported_type() {
        let names = type_names();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].type_name, "ConsultaCEP");
        let v = serde_json::to_value(&names[0]).unwrap();
        assert_eq!(v["typeName"], "ConsultaCEP");
        assert_eq!(v["label"], "Consulta CEP");
    }

    #[test]
    fn definition_keeps_table_order() {
        let text = serde_json::to_string(&consulta_cep_definition().properties).unwrap();
        let positions: Vec<usize> = CONSULTA_CEP_PROPERTIES
            .iter()
            .map(|p| text.find(&format!("\"{}\":", p.name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn definition_wire_shape() {
        let v = serde_json::to_value(consulta_cep_definition()).unwrap();
        assert_eq!(v["typeName"], "ConsultaCEP");
        assert_eq!(v["displayName"], "Consulta CEP");
        assert_eq!(
            v["properties"]["cep"],
            json!({
                "type": "string",
                "displayName": "CEP",
                "maxLength": 9,
                "requiredForVerifyingType": true
            })
        );
        assert!(v["properties"]["logradouro"]
            .get("requiredForVerifyingType")
            .is_none());
        assert_eq!(v["properties"]["uf"]["maxLength"], 2);
    }

    #[test]
    fn requested_names_accept_strings_and_objects() {
        let refs: Vec<TypeNameRef> =
            serde_json::from_value(json!(["Other", {"typeName": "ConsultaCEP"}, 7])).unwrap();
        assert_eq!(refs[0].name(), Some("Other"));
        assert_eq!(refs[1].name(), Some("ConsultaCEP"));
        assert_eq!(refs[2].name(), None);
        assert_eq!(definitions_for(Some(refs.as_slice())).len(), 1);
    }

    #[test]
    fn unknown_names_yield_empty_list() {
        let refs = vec![TypeNameRef::Plain("Endereco".into())];
        assert!(definitions_for(Some(refs.as_slice())).is_empty());
        assert!(definitions_for(Some(&[][..])).is_empty());
    }

    #[test]
    fn no_request_yields_everything() {
        assert_eq!(definitions_for(None).len(), 1);
    }

    #[test]
    fn duplicates_do_not_repeat_definition() {
        let refs = vec![
            TypeNameRef::Plain("ConsultaCEP".into()),
            TypeNameRef::Plain("ConsultaCEP".into()),
        ];
        assert_eq!(definitions_for(Some(refs.as_slice())).len(), 1);
    }
}
