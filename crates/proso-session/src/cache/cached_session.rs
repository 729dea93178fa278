use std::fmt;

use proso_core::Credentials;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedSession {
    pub points: Option<u64>,
    pub csrftoken: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Server session cookie from the last login or signup
    pub session_cookie: Option<String>,
}

impl CachedSession {
    /// Auto-login credentials, only when both halves are cached
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials::new(username.clone(), password.clone()))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for CachedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedSession")
            .field("points", &self.points)
            .field("has_csrftoken", &self.csrftoken.is_some())
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .field("has_session_cookie", &self.session_cookie.is_some())
            .finish()
    }
}
