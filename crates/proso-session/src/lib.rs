//! Client-side session for the proso backend.
//!
//! [`SessionStore`] owns the current user's profile, talks to the backend
//! through a [`ProfileBackend`] and tells subscribers when the user changes.
//! The view/flow types are headless versions of the profile page and the
//! login and signup dialogs built on top of it.

pub(crate) mod backend;
pub(crate) mod cache;
pub(crate) mod error;
pub(crate) mod login_flow;
pub(crate) mod profile_view;
pub(crate) mod session_options;
pub(crate) mod session_store;
pub(crate) mod signup_flow;
pub(crate) mod signup_promotion;
pub(crate) mod user_event;

#[cfg(test)]
mod tests;

pub use backend::ProfileBackend;
pub use backend::http_backend::{
    CSRF_COOKIE, CSRF_HEADER, HttpBackend, SESSION_COOKIE, mobile_init_url,
};
pub use backend::mobile_init::MobileInit;
pub use cache::ClientCache;
pub use cache::cached_session::CachedSession;
pub use cache::file_cache::FileCache;
pub use cache::memory_cache::MemoryCache;
pub use error::{Result as SessionResult, SessionError};
pub use login_flow::{LoginFlow, LoginOutcome};
pub use profile_view::ProfileView;
pub use session_options::SessionOptions;
pub use session_store::SessionStore;
pub use signup_flow::SignupFlow;
pub use signup_promotion::SignupPromotion;
pub use user_event::UserEvent;
