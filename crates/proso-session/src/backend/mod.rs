pub(crate) mod http_backend;
pub(crate) mod mobile_init;

use crate::{MobileInit, SessionResult};

use async_trait::async_trait;
use proso_core::{Credentials, ProfilePatch, RegistrationForm, UserProfile};

/// Remote side of the session: the profile endpoints of the backend.
///
/// Profile-returning calls hand back a [`ProfilePatch`] so the store can
/// merge only what the server actually sent.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// `GET /user/profile`
    async fn fetch_own_profile(&self) -> SessionResult<ProfilePatch>;

    /// `GET /user/profile/{name}/`
    async fn fetch_profile(&self, name: &str) -> SessionResult<ProfilePatch>;

    /// `POST /user/save/`
    async fn save_profile(
        &self,
        profile: &UserProfile,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch>;

    /// `POST /user/signup/`
    async fn signup(
        &self,
        form: &RegistrationForm,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch>;

    /// `POST /user/login/`
    async fn login(
        &self,
        credentials: &Credentials,
        csrf_token: Option<&str>,
    ) -> SessionResult<ProfilePatch>;

    /// `GET /user/logout/`
    async fn logout(&self) -> SessionResult<()>;

    /// `GET {domain}/user/initmobile`
    async fn init_mobile(
        &self,
        domain: &str,
        credentials: Option<&Credentials>,
    ) -> SessionResult<MobileInit>;

    /// Value of a cookie the backend has set, if any
    fn cookie(&self, name: &str) -> Option<String>;

    /// Put back a cookie remembered from an earlier process
    fn restore_cookie(&self, name: &str, value: &str);
}
