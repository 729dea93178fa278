use crate::{LevelInfo, ProfilePatch};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the user owning the current session.
///
/// An empty `username` means the session is anonymous. Fields the client
/// does not interpret (display name, language, ...) are kept in `extra`
/// and sent back to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub username: String,
    pub points: u64,
    pub answered_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrftoken: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Fresh anonymous profile
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty()
    }

    /// Overwrite every field present in `patch`, leaving the rest alone.
    pub fn merge(&mut self, patch: ProfilePatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(answered_count) = patch.answered_count {
            self.answered_count = answered_count;
        }
        if let Some(csrftoken) = patch.csrftoken {
            self.csrftoken = Some(csrftoken);
        }
        self.extra.extend(patch.extra);
    }

    /// Count one answer; points only move for correct ones.
    pub fn record_answer(&mut self, is_correct: bool) {
        if is_correct {
            self.points += 1;
        }
        self.answered_count += 1;
    }

    pub fn level_info(&self) -> LevelInfo {
        LevelInfo::for_points(self.points)
    }
}
