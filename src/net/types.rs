//! JSON shapes exchanged with the SocialMagic endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::transport::TransportError;

/// Reply envelope of submit and action endpoints.
///
/// Only `success`, `message` and `error` have meaning here; every other key
/// is passed through to callers untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitResponse {
    payload: Map<String, Value>,
}

impl SubmitResponse {
    /// Parse a reply body. Anything other than a JSON object is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Malformed`] for invalid JSON or a non-object root.
    pub fn parse(body: &str) -> Result<Self, TransportError> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(payload)) => Ok(Self { payload }),
            Ok(other) => Err(TransportError::Malformed(format!("expected object, got {}", json_kind(&other)))),
            Err(e) => Err(TransportError::Malformed(e.to_string())),
        }
    }

    pub fn from_payload(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Whether `success` is truthy (JavaScript rules: `0`, `""`, `false`,
    /// `null` and a missing key are all falsy).
    pub fn is_success(&self) -> bool {
        self.payload.get("success").is_some_and(truthy)
    }

    pub fn message(&self) -> Option<&str> {
        self.text_field("message")
    }

    pub fn error(&self) -> Option<&str> {
        self.text_field("error")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Dashboard counters from `GET /api/stats`. Extra keys are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatsSnapshot {
    pub total_posts: i64,
    pub total_reach: i64,
    pub scheduled: i64,
    pub total_media: i64,
}
