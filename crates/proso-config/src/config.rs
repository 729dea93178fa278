use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, MessagesConfig, SessionConfig, SignupConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub messages: MessagesConfig,
    pub signup: SignupConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PROSO_CONFIG_DIR env var, else use ./.proso/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply PROSO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PROSO_CONFIG_DIR env var > ./.proso/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.messages.validate()?;
        Ok(())
    }

    /// Absolute path of the client-side session cache.
    pub fn cache_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.cache_file))
    }

    /// Log configuration summary (never logs cached credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s, mobile: {})",
            self.api.base_url,
            self.api.timeout_secs,
            self.api.mobile_domain.as_deref().unwrap_or("disabled")
        );
        info!(
            "  session: require_login={}, deferred_check={}ms, events={}, cache={}",
            self.session.require_login,
            self.session.deferred_check_ms,
            self.session.event_capacity,
            self.session.cache_file
        );
        info!(
            "  messages: default_field={}, default_alert={}",
            self.messages.default_error_field, self.messages.default_alert_type
        );
        info!(
            "  signup: variation={}, open_on_start={}",
            self.signup.promotion_variation, self.signup.open_on_start
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("PROSO_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("PROSO_API_MOBILE_DOMAIN", &mut self.api.mobile_domain);
        Self::apply_env_parse("PROSO_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_bool(
            "PROSO_SESSION_REQUIRE_LOGIN",
            &mut self.session.require_login,
        );
        Self::apply_env_parse(
            "PROSO_SESSION_DEFERRED_CHECK_MS",
            &mut self.session.deferred_check_ms,
        );
        Self::apply_env_parse(
            "PROSO_SESSION_EVENT_CAPACITY",
            &mut self.session.event_capacity,
        );
        Self::apply_env_string("PROSO_SESSION_CACHE_FILE", &mut self.session.cache_file);

        // Messages
        Self::apply_env_string(
            "PROSO_MESSAGES_GENERIC_ERROR",
            &mut self.messages.generic_error,
        );
        Self::apply_env_string(
            "PROSO_MESSAGES_DEFAULT_ERROR_FIELD",
            &mut self.messages.default_error_field,
        );

        // Signup
        Self::apply_env_parse(
            "PROSO_SIGNUP_PROMOTION_VARIATION",
            &mut self.signup.promotion_variation,
        );
        Self::apply_env_bool("PROSO_SIGNUP_OPEN_ON_START", &mut self.signup.open_on_start);

        // Logging
        Self::apply_env_parse("PROSO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PROSO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PROSO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
