use std::time::Duration;

use proso_config::Config;
use proso_core::{DEFAULT_ALERT_TYPE, DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE};

/// Runtime knobs of a [`crate::SessionStore`]
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub require_login: bool,
    pub deferred_check: Duration,
    /// Broadcast buffer per subscriber (bounded so slow listeners lag instead of growing memory)
    pub event_capacity: usize,
    pub mobile_domain: Option<String>,
    pub generic_error: String,
    pub default_error_field: String,
    pub default_alert_type: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            require_login: false,
            deferred_check: Duration::from_millis(100),
            event_capacity: 64,
            mobile_domain: None,
            generic_error: DEFAULT_ERROR_MESSAGE.to_string(),
            default_error_field: DEFAULT_ERROR_FIELD.to_string(),
            default_alert_type: DEFAULT_ALERT_TYPE.to_string(),
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            require_login: config.session.require_login,
            deferred_check: Duration::from_millis(config.session.deferred_check_ms),
            event_capacity: config.session.event_capacity,
            mobile_domain: config.api.mobile_domain.clone(),
            generic_error: config.messages.generic_error.clone(),
            default_error_field: config.messages.default_error_field.clone(),
            default_alert_type: config.messages.default_alert_type.clone(),
        }
    }
}
