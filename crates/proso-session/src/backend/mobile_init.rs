use serde::Deserialize;

/// Response of the mobile session bootstrap.
///
/// `password` is only present when the backend generated credentials for
/// a new anonymous account; those are cached for later auto-login.
#[derive(Clone, Deserialize)]
pub struct MobileInit {
    pub username: String,
    pub csrftoken: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl std::fmt::Debug for MobileInit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileInit")
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .finish_non_exhaustive()
    }
}
