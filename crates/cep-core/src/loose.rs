//! # Loose JSON Coercion
//!
//! The form-automation platform and ViaCEP both send loosely typed JSON: a
//! CEP may arrive as a number, `erro` may be `true` or `"true"`, and address
//! fields may be missing or null. These helpers apply one consistent rule set.

use serde_json::Value;

/// Coerce a JSON value to a string, treating falsy values as empty.
///
/// - strings are returned as-is (the empty string stays empty)
/// - non-zero numbers become their decimal text; integral floats drop the
///   fractional part (`10010000.0` becomes `"10010000"`)
/// - `true` becomes `"true"`
/// - `null`, `false`, `0`, arrays and objects become `""`
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if !is_zero(n) => number_text(n),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Coerce an optional JSON member to a string; a missing member is `""`.
pub fn loose_field(object: &serde_json::Map<String, Value>, key: &str) -> String {
    object.get(key).map(loose_string).unwrap_or_default()
}

/// JavaScript-style truthiness.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !is_zero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().map(|f| f == 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_pass_through() {
        assert_eq!(loose_string(&json!("01001-000")), "01001-000");
        assert_eq!(loose_string(&json!("")), "");
    }

    #[test]
    fn numbers_become_text() {
        assert_eq!(loose_string(&json!(1001000)), "1001000");
        assert_eq!(loose_string(&json!(0)), "");
    }

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(loose_string(&json!(10010000.0)), "10010000");
        assert_eq!(loose_string(&json!(-42.0)), "-42");
        assert_eq!(loose_string(&json!(1.5)), "1.5");
        assert_eq!(loose_string(&json!(0.0)), "");
    }

    #[test]
    fn falsy_values_become_empty() {
        assert_eq!(loose_string(&Value::Null), "");
        assert_eq!(loose_string(&json!(false)), "");
        assert_eq!(loose_string(&json!({"a": 1})), "");
        assert_eq!(loose_string(&json!([1, 2])), "");
    }

    #[test]
    fn true_becomes_text() {
        assert_eq!(loose_string(&json!(true)), "true");
    }

    #[test]
    fn missing_field_is_empty() {
        let obj = json!({"uf": "SP"});
        let map = obj.as_object().unwrap();
        assert_eq!(loose_field(map, "uf"), "SP");
        assert_eq!(loose_field(map, "bairro"), "");
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("true")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
