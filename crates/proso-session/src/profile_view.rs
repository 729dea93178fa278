use crate::{SessionResult, SessionStore};

use log::debug;
use proso_core::{FieldError, UserProfile};

/// Profile page for one user: view everyone, edit only yourself.
pub struct ProfileView {
    store: SessionStore,
    pub user: UserProfile,
    pub edit_rights: bool,
    pub editing: bool,
    pub form_error: Option<FieldError>,
}

impl ProfileView {
    /// Load `name`'s profile; enter edit mode right away when
    /// `edit_requested` and the profile belongs to the current user.
    pub async fn open(store: SessionStore, name: &str, edit_requested: bool) -> SessionResult<Self> {
        let user = store.fetch_by_name(name).await?;
        let edit_rights = user.username == store.current().username;

        let mut view = Self {
            store,
            user,
            edit_rights,
            editing: false,
            form_error: None,
        };
        if edit_requested {
            view.begin_edit();
        }
        Ok(view)
    }

    /// Returns whether edit mode was entered
    pub fn begin_edit(&mut self) -> bool {
        if self.edit_rights {
            self.editing = true;
        } else {
            debug!("Refusing to edit profile of {}", self.user.username);
        }
        self.editing
    }

    /// Save the edited fields.
    ///
    /// Any failure ends up as a [`FieldError`]: the backend's own when it
    /// named a field, otherwise the generic message on the default field.
    pub async fn save(&mut self) -> Result<UserProfile, FieldError> {
        let result = self.store.save(&self.user).await;
        match result {
            Ok(saved) => {
                self.user = saved.clone();
                self.editing = false;
                self.form_error = None;
                Ok(saved)
            }
            Err(err) => {
                let options = self.store.options();
                let field_error =
                    err.into_field_error(&options.default_error_field, &options.generic_error);
                self.form_error = Some(field_error.clone());
                Err(field_error)
            }
        }
    }
}
