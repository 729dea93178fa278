use crate::{CoreError, ProfilePatch, UserProfile};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

#[test]
fn test_empty_patch() {
    assert!(ProfilePatch::default().is_empty());
    assert!(!ProfilePatch::with_username("alice").is_empty());
}

#[test]
fn test_set_field_counters() {
    let mut patch = ProfilePatch::default();
    assert_that!(patch.set_field("points", "42"), ok(anything()));
    assert_that!(patch.set_field("answered_count", " 7 "), ok(anything()));
    assert_that!(patch.points, some(eq(42u64)));
    assert_that!(patch.answered_count, some(eq(7u64)));
}

#[test]
fn test_set_field_rejects_non_numeric_counter() {
    let mut patch = ProfilePatch::default();
    let result = patch.set_field("points", "lots");
    assert_that!(result, err(anything()));
    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidField { ref field, .. } if field == "points"
    ));
    assert!(patch.points.is_none());
}

#[test]
fn test_set_field_rejects_empty_key() {
    let mut patch = ProfilePatch::default();
    assert_that!(patch.set_field("  ", "x"), err(anything()));
}

#[test]
fn test_set_field_unknown_key_goes_to_extra() {
    let mut patch = ProfilePatch::default();
    patch.set_field("first_name", "Alice").unwrap();
    assert_eq!(patch.extra["first_name"], "Alice");
}

#[test]
fn test_patch_from_profile_restores_profile() {
    let original = UserProfile {
        username: "carol".to_string(),
        points: 5,
        answered_count: 8,
        csrftoken: Some("tok".to_string()),
        ..Default::default()
    };

    let mut rebuilt = UserProfile::anonymous();
    rebuilt.merge(ProfilePatch::from(original.clone()));
    assert_eq!(rebuilt, original);
}
