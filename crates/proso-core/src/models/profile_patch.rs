use crate::{CoreError, CoreResult, UserProfile};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Partial profile: only the fields that are present get merged.
///
/// Seeds passed to `init` and every profile the backend returns are read
/// as patches, so a response that omits `points` keeps the local value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrftoken: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfilePatch {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.points.is_none()
            && self.answered_count.is_none()
            && self.csrftoken.is_none()
            && self.extra.is_empty()
    }

    /// Set a single field from its textual form (`key=value` editing).
    ///
    /// Counters must parse as non-negative integers; unknown keys land in
    /// `extra` as strings.
    #[track_caller]
    pub fn set_field(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::Validation {
                message: "profile field name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match key {
            "username" => self.username = Some(value.to_string()),
            "csrftoken" => self.csrftoken = Some(value.to_string()),
            "points" => self.points = Some(Self::parse_counter(key, value)?),
            "answered_count" => self.answered_count = Some(Self::parse_counter(key, value)?),
            _ => {
                self.extra
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        Ok(())
    }

    #[track_caller]
    fn parse_counter(key: &str, value: &str) -> CoreResult<u64> {
        value.trim().parse().map_err(|_| CoreError::InvalidField {
            field: key.to_string(),
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl From<UserProfile> for ProfilePatch {
    fn from(profile: UserProfile) -> Self {
        Self {
            username: Some(profile.username),
            points: Some(profile.points),
            answered_count: Some(profile.answered_count),
            csrftoken: profile.csrftoken,
            extra: profile.extra,
        }
    }
}
