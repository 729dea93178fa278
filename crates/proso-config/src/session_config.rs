use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_FILE, DEFAULT_DEFERRED_CHECK_MS,
    DEFAULT_EVENT_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ask anonymous users to log in shortly after startup
    pub require_login: bool,
    /// Delay before the login requirement is checked
    pub deferred_check_ms: u64,
    /// Buffered "user updated" events per subscriber
    pub event_capacity: usize,
    /// Client-side cache file, relative to the config directory
    pub cache_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            require_login: false,
            deferred_check_ms: DEFAULT_DEFERRED_CHECK_MS,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            cache_file: String::from(DEFAULT_CACHE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.event_capacity == 0 {
            return Err(ConfigError::session("session.event_capacity must be > 0"));
        }

        let path = std::path::Path::new(&self.cache_file);
        if self.cache_file.is_empty() || path.is_absolute() || self.cache_file.contains("..") {
            return Err(ConfigError::session(
                "session.cache_file must be a non-empty relative path without '..'",
            ));
        }

        Ok(())
    }
}
