mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod messages_config;
mod session_config;
mod signup_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use messages_config::MessagesConfig;
pub use session_config::SessionConfig;
pub use signup_config::SignupConfig;

const CONFIG_DIR_ENV: &str = "PROSO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".proso";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DEFERRED_CHECK_MS: u64 = 100;
const DEFAULT_EVENT_CAPACITY: usize = 64;
const DEFAULT_CACHE_FILE: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
