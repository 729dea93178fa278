use crate::{ProfilePatch, UserProfile};

use serde_json::json;

#[test]
fn test_anonymous_profile() {
    let profile = UserProfile::anonymous();
    assert!(profile.is_anonymous());
    assert_eq!(profile.points, 0);
    assert_eq!(profile.answered_count, 0);
    assert!(profile.csrftoken.is_none());
}

#[test]
fn test_record_correct_answer() {
    let mut profile = UserProfile::anonymous();
    profile.record_answer(true);
    assert_eq!(profile.points, 1);
    assert_eq!(profile.answered_count, 1);
}

#[test]
fn test_record_wrong_answer() {
    let mut profile = UserProfile::anonymous();
    profile.record_answer(false);
    assert_eq!(profile.points, 0);
    assert_eq!(profile.answered_count, 1);
}

#[test]
fn test_merge_overwrites_only_present_fields() {
    let mut profile = UserProfile {
        username: "alice".to_string(),
        points: 12,
        answered_count: 40,
        ..Default::default()
    };

    let patch: ProfilePatch =
        serde_json::from_value(json!({"points": 20, "first_name": "Alice"})).unwrap();
    profile.merge(patch);

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.points, 20);
    assert_eq!(profile.answered_count, 40);
    assert_eq!(profile.extra["first_name"], "Alice");
}

#[test]
fn test_profile_deserializes_with_missing_fields() {
    let profile: UserProfile = serde_json::from_value(json!({"username": "bob"})).unwrap();
    assert_eq!(profile.username, "bob");
    assert_eq!(profile.points, 0);
    assert!(!profile.is_anonymous());
}

#[test]
fn test_profile_round_trips_unknown_fields() {
    let body = json!({
        "username": "bob",
        "points": 3,
        "answered_count": 9,
        "send_emails": true,
        "language": "cs"
    });
    let profile: UserProfile = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(serde_json::to_value(&profile).unwrap(), body);
}
