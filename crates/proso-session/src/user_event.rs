use proso_core::UserProfile;

/// Notification published by the session store
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    /// Login, logout, signup or a recorded answer changed the profile
    Updated(UserProfile),
    /// Login is required and the session is still anonymous
    LoginRequired(UserProfile),
}
