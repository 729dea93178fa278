pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::alert::Alert;
pub use models::credentials::Credentials;
pub use models::field_error::FieldError;
pub use models::generic_error::GenericError;
pub use models::level_info::LevelInfo;
pub use models::profile_patch::ProfilePatch;
pub use models::registration_form::RegistrationForm;
pub use models::save_error::SaveError;
pub use models::user_profile::UserProfile;

/// Size of the first level's point range
pub const INITIAL_RANGE_SIZE: u64 = 30;
/// Amount the range growth itself increases by after every level
pub const RANGE_GROWTH_STEP: u64 = 10;

/// Severity tag used when the backend does not supply one
pub const DEFAULT_ALERT_TYPE: &str = "danger";
/// Generic user-facing failure message (the application's source locale)
pub const DEFAULT_ERROR_MESSAGE: &str = "V aplikaci bohužel nastala chyba.";
/// Form field that receives errors the backend did not attribute to a field
pub const DEFAULT_ERROR_FIELD: &str = "name";
