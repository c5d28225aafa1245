//! Secret value model.
//!
//! A secret's shape is re-derived from its content on every fetch: one parse
//! attempt decides between plain text and JSON. There is no stored schema.

use serde_json::{Map, Value};

/// A secret value as served to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretValue {
    /// Raw string payload that does not parse as JSON.
    Text(String),

    /// Parsed JSON payload, served structurally. Only an object exposes
    /// named sub-values for key projection.
    Json(Value),
}

impl SecretValue {
    /// Classify a raw secret string with a single parse attempt.
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw),
        }
    }

    /// The payload as a JSON object, when it is one. Scalars, arrays, and
    /// plain text have no named sub-values.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Json(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Look up a single key; `None` when the payload is not an object or the
    /// key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Convert into the JSON value served under the `value` response field.
    pub fn into_json(self) -> Value {
        match self {
            Self::Text(raw) => Value::String(raw),
            Self::Json(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_object() {
        let value = SecretValue::parse(r#"{"username":"admin","port":5432}"#.to_string());
        assert!(value.as_object().is_some());
        assert_eq!(value.get("username"), Some(&json!("admin")));
        assert_eq!(value.get("port"), Some(&json!(5432)));
        assert_eq!(value.get("missing"), None);
    }

    #[test]
    fn test_parse_plain_string() {
        let value = SecretValue::parse("hello".to_string());
        assert_eq!(value, SecretValue::Text("hello".to_string()));
        assert_eq!(value.get("anything"), None);
    }

    #[test]
    fn test_non_object_json_parses_but_has_no_keys() {
        // Numbers, arrays, and quoted strings are valid JSON and are served
        // as such, but none of them expose named sub-values.
        for raw in ["42", "[1,2,3]", "\"quoted\"", "true", "null"] {
            let value = SecretValue::parse(raw.to_string());
            assert!(matches!(value, SecretValue::Json(_)), "{} should parse", raw);
            assert!(value.as_object().is_none(), "{} has no object form", raw);
            assert_eq!(value.get("a"), None);
        }
    }

    #[test]
    fn test_into_json() {
        assert_eq!(SecretValue::parse("hello".to_string()).into_json(), json!("hello"));
        assert_eq!(SecretValue::parse("42".to_string()).into_json(), json!(42));
        assert_eq!(SecretValue::parse("[1,2,3]".to_string()).into_json(), json!([1, 2, 3]));
        assert_eq!(
            SecretValue::parse(r#"{"a":1}"#.to_string()).into_json(),
            json!({"a": 1})
        );
    }
}
