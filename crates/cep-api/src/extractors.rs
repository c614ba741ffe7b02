//! # Request Parameter & Body Helpers
//!
//! The form platform sends the routing `action` and OAuth parameters either
//! in the query string or as an urlencoded form body, and the payload as
//! loosely framed JSON. These helpers read both leniently.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use serde_json::Value;

/// Named parameters merged from the query string and an urlencoded body.
///
/// When a name appears in both, the query string wins. Within one source
/// the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    /// Collect parameters from a raw query string and, if the body is
    /// `application/x-www-form-urlencoded`, from the body.
    pub fn collect(raw_query: Option<&str>, headers: &HeaderMap, body: &[u8]) -> Self {
        let mut values = HashMap::new();
        if let Some(query) = raw_query {
            absorb(&mut values, query.as_bytes());
        }
        if is_form(headers) {
            absorb(&mut values, body);
        }
        Self { values }
    }

    /// A parameter's value, trimmed. `None` when absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.trim())
    }
}

fn absorb(values: &mut HashMap<String, String>, encoded: &[u8]) {
    for (key, value) in url::form_urlencoded::parse(encoded) {
        values
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            let media_type = v.split(';').next().unwrap_or_default().trim();
            media_type.eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

/// Parse a request body as JSON, leniently.
///
/// An empty body, or one whose trimmed text does not open with `{` or `[`,
/// is treated as an empty object. Anything that looks like JSON must parse.
///
/// # Errors
///
/// Returns the `serde_json` error when a JSON-looking body is malformed.
pub fn parse_json_body(body: &[u8]) -> Result<Value, serde_json::Error> {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn reads_query_parameters() {
        let params =
            RequestParams::collect(Some("action=verify&x=%20y%20"), &HeaderMap::new(), b"");
        assert_eq!(params.get("action"), Some("verify"));
        assert_eq!(params.get("x"), Some("y"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn reads_form_body_when_urlencoded() {
        let params = RequestParams::collect(
            Some("action=oauthToken"),
            &form_headers(),
            b"grant_type=client_credentials",
        );
        assert_eq!(params.get("grant_type"), Some("client_credentials"));
    }

    #[test]
    fn form_media_type_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/X-WWW-Form-URLEncoded ; charset=UTF-8"),
        );
        let params = RequestParams::collect(None, &headers, b"grant_type=client_credentials");
        assert_eq!(params.get("grant_type"), Some("client_credentials"));
    }

    #[test]
    fn similar_media_type_is_not_form() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded-extra"),
        );
        let params = RequestParams::collect(None, &headers, b"grant_type=password");
        assert_eq!(params.get("grant_type"), None);
    }

    #[test]
    fn ignores_body_when_not_form() {
        let params = RequestParams::collect(None, &HeaderMap::new(), b"grant_type=password");
        assert_eq!(params.get("grant_type"), None);
    }

    #[test]
    fn query_wins_over_form() {
        let params =
            RequestParams::collect(Some("action=verify"), &form_headers(), b"action=oauthToken");
        assert_eq!(params.get("action"), Some("verify"));
    }

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_json_body(b"").unwrap(), json!({}));
        assert_eq!(parse_json_body(b"   ").unwrap(), json!({}));
    }

    #[test]
    fn non_json_body_is_empty_object() {
        assert_eq!(parse_json_body(b"cep=01001000").unwrap(), json!({}));
    }

    #[test]
    fn json_body_is_parsed() {
        let v = parse_json_body(br#" {"data": {"cep": "01001-000"}} "#).unwrap();
        assert_eq!(v["data"]["cep"], "01001-000");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_json_body(b"{\"data\": ").is_err());
    }
}
