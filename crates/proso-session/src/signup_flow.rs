use crate::SessionStore;

use log::debug;
use proso_core::{Alert, ProfilePatch, RegistrationForm};

/// Signup modal state.
pub struct SignupFlow {
    store: SessionStore,
    pub form: RegistrationForm,
    pub alerts: Vec<Alert>,
    pub loading: bool,
    pub success: bool,
}

impl SignupFlow {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            form: RegistrationForm::default(),
            alerts: Vec::new(),
            loading: false,
            success: false,
        }
    }

    /// Returns whether the account was created.
    ///
    /// On success the form is cleared and the session re-initialized so the
    /// new account's full profile is fetched.
    pub async fn submit(&mut self) -> bool {
        self.loading = true;
        debug!("Submitting signup for {}", self.form.username);
        let result = self.store.signup(&self.form).await;
        self.loading = false;

        match result {
            Ok(_) => {
                self.form = RegistrationForm::default();
                self.success = true;
                self.store.init(ProfilePatch::default());
                true
            }
            Err(err) => {
                self.alerts.push(Alert::from(err));
                false
            }
        }
    }

    /// Dismiss an alert; out-of-range indexes are ignored
    pub fn close_alert(&mut self, index: usize) -> Option<Alert> {
        (index < self.alerts.len()).then(|| self.alerts.remove(index))
    }
}
