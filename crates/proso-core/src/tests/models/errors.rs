use crate::{
    Alert, Credentials, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE,
    FieldError, GenericError, RegistrationForm, SaveError,
};

use serde_json::{Value, json};

#[test]
fn test_save_error_with_field_and_message() {
    let body = json!({"field": "username", "msg": "taken"});
    let err = SaveError::from_response_body(&body, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE);
    assert_eq!(err, SaveError::Field(FieldError::new("username", "taken")));
    assert_eq!(
        err.into_field_error(DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE),
        FieldError::new("username", "taken")
    );
}

#[test]
fn test_save_error_unknown_shape_targets_default_field() {
    for body in [json!({"error": "boom"}), json!({"field": "username"}), Value::Null] {
        let err =
            SaveError::from_response_body(&body, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE);
        assert!(matches!(err, SaveError::Generic(_)));
        assert_eq!(
            err.into_field_error(DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE),
            FieldError::new(DEFAULT_ERROR_FIELD, DEFAULT_ERROR_MESSAGE)
        );
    }
}

#[test]
fn test_generic_error_uses_backend_values() {
    let body = json!({"type": "warning", "msg": "Wrong password"});
    let err = GenericError::from_response_body(&body, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE);
    assert_eq!(err, GenericError::new("warning", "Wrong password"));
}

#[test]
fn test_generic_error_defaults() {
    let body = json!({"type": "", "msg": 42});
    let err = GenericError::from_response_body(&body, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE);
    assert_eq!(err.kind, DEFAULT_ALERT_TYPE);
    assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
}

#[test]
fn test_alert_from_generic_error() {
    let alert = Alert::from(GenericError::new("danger", "nope"));
    assert_eq!(
        serde_json::to_value(alert).unwrap(),
        json!({"type": "danger", "msg": "nope"})
    );
}

#[test]
fn test_credentials_debug_hides_password() {
    let creds = Credentials::new("alice", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
    assert!(Credentials::new(" ", "x").validate().is_err());
    assert!(creds.validate().is_ok());
}

#[test]
fn test_registration_form_debug_hides_passwords() {
    let form = RegistrationForm {
        username: "alice".to_string(),
        password: "secret-one".to_string(),
        password_check: "secret-one".to_string(),
        ..Default::default()
    };
    assert!(!format!("{form:?}").contains("secret-one"));
    assert!(!form.is_blank());
    assert!(RegistrationForm::default().is_blank());
}
