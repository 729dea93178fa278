use crate::GenericError;

use serde::Serialize;

/// Dismissible entry in a modal's alert list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "msg")]
    pub message: String,
}

impl From<GenericError> for Alert {
    fn from(err: GenericError) -> Self {
        Self {
            kind: err.kind,
            message: err.message,
        }
    }
}
