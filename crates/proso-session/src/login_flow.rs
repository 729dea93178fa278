use crate::SessionStore;

use log::debug;
use proso_core::{Alert, Credentials, UserProfile};

/// What the caller should do after a login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Logged in; the page should reload with the new session
    Reload(UserProfile),
    /// Failed; an alert was appended
    Failed,
}

/// Login modal state.
pub struct LoginFlow {
    store: SessionStore,
    pub credentials: Credentials,
    pub alerts: Vec<Alert>,
    pub loading: bool,
}

impl LoginFlow {
    /// Only anonymous users get the login form
    pub fn should_open(profile: &UserProfile) -> bool {
        profile.is_anonymous()
    }

    pub fn open(store: SessionStore) -> Option<Self> {
        if !Self::should_open(&store.current()) {
            return None;
        }
        Some(Self {
            store,
            credentials: Credentials::default(),
            alerts: Vec::new(),
            loading: false,
        })
    }

    pub async fn submit(&mut self) -> LoginOutcome {
        self.loading = true;
        debug!("Submitting login for {}", self.credentials.username);
        let result = self.store.login(&self.credentials).await;
        self.loading = false;

        match result {
            Ok(profile) => LoginOutcome::Reload(profile),
            Err(err) => {
                self.alerts.push(Alert::from(err));
                LoginOutcome::Failed
            }
        }
    }

    /// Dismiss an alert; out-of-range indexes are ignored
    pub fn close_alert(&mut self, index: usize) -> Option<Alert> {
        (index < self.alerts.len()).then(|| self.alerts.remove(index))
    }
}
