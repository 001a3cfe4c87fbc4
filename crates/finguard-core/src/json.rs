//! Lenient JSON helpers for backend payloads.
//!
//! The analysis backend is an LLM-driven service, so no field of its payload
//! is guaranteed to be present or even to have the documented type. These
//! helpers coerce the shapes we can reasonably display and reject the rest
//! with a descriptive error.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Failure to interpret one display subtree of a backend payload.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("No invoice data available")]
    Missing,

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// JavaScript-style truthiness, which is what the backend's own clients use
/// when checking `success` and `data.invoice_data`.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar as display text. Falsy values become `None`.
pub fn value_to_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `deserialize_with` helper for text fields that may arrive as strings or
/// numbers (invoice numbers frequently do).
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    match value {
        Value::Array(_) | Value::Object(_) => Err(D::Error::custom(format!(
            "expected text, found {}",
            kind_of(&value)
        ))),
        other => Ok(value_to_text(&other)),
    }
}

/// `deserialize_with` helper for monetary amounts and quantities.
///
/// Accepts numbers and numeric strings (`"18000.00"`, `"1,200"`). Falsy or
/// unparsable scalars are treated as absent.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    match value {
        Value::Array(_) | Value::Object(_) => Err(D::Error::custom(format!(
            "expected a number, found {}",
            kind_of(&value)
        ))),
        other => Ok(value_to_number(&other)),
    }
}

fn value_to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        Value::Bool(true) => Some(1.0),
        _ => None,
    }?;
    (number != 0.0 && number.is_finite()).then_some(number)
}

/// `deserialize_with` helper for lists where anything but an array means
/// "no entries".
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// `deserialize_with` helper for lists of records.
///
/// Like [`lenient_list`], but an entry that is not an object (a bare
/// `"Widget"`, a number, `null`) carries no fields and becomes
/// `T::default()` instead of failing the whole list. Malformed fields
/// inside an object entry are still errors.
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).map_err(D::Error::custom),
                _ => Ok(T::default()),
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// `deserialize_with` helper for lists where a falsy value means "no
/// entries" but any other non-array value is a malformed payload.
pub fn strict_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Some(value) if is_truthy(&value) => Err(D::Error::custom(format!(
            "expected a list, found {}",
            kind_of(&value)
        ))),
        _ => Ok(Vec::new()),
    }
}

/// Human name of a JSON value's type, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "lenient_list")]
        loose: Vec<u32>,
        #[serde(default, deserialize_with = "strict_list")]
        strict: Vec<u32>,
    }

    #[test]
    fn test_truthiness_matches_js_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_text_accepts_numbers_and_drops_empty() {
        let p: Probe = serde_json::from_value(json!({ "text": 1042 })).unwrap();
        assert_eq!(p.text.as_deref(), Some("1042"));

        let p: Probe = serde_json::from_value(json!({ "text": "" })).unwrap();
        assert_eq!(p.text, None);

        let p: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.text, None);
    }

    #[test]
    fn test_text_rejects_objects() {
        let err = serde_json::from_value::<Probe>(json!({ "text": { "a": 1 } })).unwrap_err();
        assert!(err.to_string().contains("expected text"));
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let p: Probe = serde_json::from_value(json!({ "number": "18,000.50" })).unwrap();
        assert_eq!(p.number, Some(18000.5));

        let p: Probe = serde_json::from_value(json!({ "number": "abc" })).unwrap();
        assert_eq!(p.number, None);

        let p: Probe = serde_json::from_value(json!({ "number": 0 })).unwrap();
        assert_eq!(p.number, None);
    }

    #[test]
    fn test_lenient_list_ignores_non_arrays() {
        let p: Probe = serde_json::from_value(json!({ "loose": "nope" })).unwrap();
        assert!(p.loose.is_empty());

        let p: Probe = serde_json::from_value(json!({ "loose": [1, 2] })).unwrap();
        assert_eq!(p.loose, vec![1, 2]);
    }

    #[test]
    fn test_strict_list_rejects_truthy_non_arrays() {
        let p: Probe = serde_json::from_value(json!({ "strict": null })).unwrap();
        assert!(p.strict.is_empty());

        let err = serde_json::from_value::<Probe>(json!({ "strict": "oops" })).unwrap_err();
        assert!(err.to_string().contains("expected a list, found a string"));
    }
}
