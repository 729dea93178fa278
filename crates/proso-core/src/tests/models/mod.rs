mod errors;
mod level_info;
mod profile_patch;
mod user_profile;
