use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signup form contents. Validation happens on the backend.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistrationForm {
    pub fn is_blank(&self) -> bool {
        self.username.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.password_check.is_empty()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.extra.is_empty()
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_check", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}
