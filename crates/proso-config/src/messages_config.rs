use crate::{ConfigError, ConfigErrorResult};

use proso_core::{DEFAULT_ALERT_TYPE, DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE};
use serde::Deserialize;

/// Fallbacks used when the backend's error response says nothing useful
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub generic_error: String,
    pub default_error_field: String,
    pub default_alert_type: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            generic_error: String::from(DEFAULT_ERROR_MESSAGE),
            default_error_field: String::from(DEFAULT_ERROR_FIELD),
            default_alert_type: String::from(DEFAULT_ALERT_TYPE),
        }
    }
}

impl MessagesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.generic_error.trim().is_empty() {
            return Err(ConfigError::messages("messages.generic_error cannot be empty"));
        }
        if self.default_error_field.trim().is_empty() {
            return Err(ConfigError::messages(
                "messages.default_error_field cannot be empty",
            ));
        }
        if self.default_alert_type.trim().is_empty() {
            return Err(ConfigError::messages(
                "messages.default_alert_type cannot be empty",
            ));
        }
        Ok(())
    }
}
