use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error meant for an alert banner rather than a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "msg")]
    pub message: String,
}

impl GenericError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Read `{type, msg}` from a backend error body.
    ///
    /// Missing, empty or non-string members fall back to the defaults, so
    /// any body (including `null`) yields a displayable error.
    pub fn from_response_body(body: &Value, default_kind: &str, default_message: &str) -> Self {
        Self {
            kind: non_empty_str(body, "type").unwrap_or(default_kind).to_string(),
            message: non_empty_str(body, "msg")
                .unwrap_or(default_message)
                .to_string(),
        }
    }
}

pub(crate) fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for GenericError {}
