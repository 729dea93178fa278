use crate::SessionOptions;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use proso_config::Config;
use proso_core::{DEFAULT_ALERT_TYPE, DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE};

#[test]
fn test_default_options() {
    let options = SessionOptions::default();
    assert!(!options.require_login);
    assert_eq!(options.deferred_check, Duration::from_millis(100));
    assert_eq!(options.generic_error, DEFAULT_ERROR_MESSAGE);
    assert_eq!(options.default_error_field, DEFAULT_ERROR_FIELD);
    assert_eq!(options.default_alert_type, DEFAULT_ALERT_TYPE);
    assert_that!(options.mobile_domain, none());
}

#[test]
fn test_options_from_config() {
    let mut config = Config::default();
    config.session.require_login = true;
    config.session.deferred_check_ms = 5;
    config.api.mobile_domain = Some("https://m.example.org".to_string());
    config.messages.generic_error = "Something went wrong".to_string();

    let options = SessionOptions::from(&config);
    assert!(options.require_login);
    assert_eq!(options.deferred_check, Duration::from_millis(5));
    assert_that!(
        options.mobile_domain.as_deref(),
        some(eq("https://m.example.org"))
    );
    assert_that!(options.event_capacity, eq(64usize));
    assert_eq!(options.generic_error, "Something went wrong");
}
