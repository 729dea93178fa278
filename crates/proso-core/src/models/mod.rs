pub mod alert;
pub mod credentials;
pub mod field_error;
pub mod generic_error;
pub mod level_info;
pub mod profile_patch;
pub mod registration_form;
pub mod save_error;
pub mod user_profile;
