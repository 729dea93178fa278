use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Login form contents.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "username is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
