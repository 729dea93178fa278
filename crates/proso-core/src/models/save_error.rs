use crate::models::generic_error::non_empty_str;
use crate::{FieldError, GenericError};

use std::fmt;

use serde_json::Value;

/// Outcome of a rejected profile save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The backend named the offending field
    Field(FieldError),
    /// Anything else: unknown body shape, transport failure
    Generic(GenericError),
}

impl SaveError {
    /// Classify a backend error body such as
    /// `{"field": "username", "msg": "taken"}`.
    pub fn from_response_body(body: &Value, default_kind: &str, default_message: &str) -> Self {
        match (non_empty_str(body, "field"), non_empty_str(body, "msg")) {
            (Some(field), Some(message)) => Self::Field(FieldError::new(field, message)),
            _ => Self::Generic(GenericError::from_response_body(
                body,
                default_kind,
                default_message,
            )),
        }
    }

    /// Turn the error into something a form can display inline.
    ///
    /// Field errors are kept as-is; everything else is pinned to
    /// `default_field` with `fallback_message`.
    pub fn into_field_error(self, default_field: &str, fallback_message: &str) -> FieldError {
        match self {
            Self::Field(err) => err,
            Self::Generic(_) => FieldError::new(default_field, fallback_message),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SaveError {}
