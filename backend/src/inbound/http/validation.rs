//! Shared request-body helpers for inbound HTTP adapters.
//!
//! Handlers accept any well-formed JSON body and read their fields leniently:
//! a value of the wrong JSON type is carried into the domain as text, where
//! it fails validation after the caller has been authorised. Only bodies that
//! are not valid JSON are rejected by the extractor.
//!
//! Falsy JSON values (`false`, `0`) are read as empty answers so that the
//! domain reports them as missing input.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::domain::NumericInput;

/// Read a request DTO from an arbitrary JSON body.
///
/// A body that is not a JSON object carries no fields and yields the
/// default DTO.
pub(crate) fn from_body<T>(body: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !body.is_object() {
        debug!("request body is not a JSON object; reading no fields");
        return T::default();
    }
    serde_json::from_value(body).unwrap_or_else(|err| {
        debug!(error = %err, "request body fields could not be read");
        T::default()
    })
}

fn is_falsy_scalar(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other if is_falsy_scalar(&other) => Some(String::new()),
        other => Some(other.to_string()),
    }
}

fn number_from_value(value: Value) -> Option<NumericInput> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(NumericInput::Text(text)),
        Value::Number(number) => number.as_f64().map(NumericInput::Number),
        Value::Bool(false) => Some(NumericInput::Number(0.0)),
        other => Some(NumericInput::Text(other.to_string())),
    }
}

/// Deserialise an optional text field from any JSON value.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_from_value))
}

/// Deserialise an optional numeric field from any JSON value.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<NumericInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(number_from_value))
}
