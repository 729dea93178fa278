use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Where the profile backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend root, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Domain used for the mobile session bootstrap (disabled when unset)
    pub mobile_domain: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            mobile_domain: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("api.base_url", &self.base_url)?;

        if let Some(ref domain) = self.mobile_domain {
            Self::validate_url("api.mobile_domain", domain)?;
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "{name} must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }
}
