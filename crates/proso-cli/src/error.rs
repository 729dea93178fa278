use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use proso_config::ConfigError;
use proso_core::{CoreError, FieldError, GenericError};
use proso_session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Save rejected: {0}")]
    Save(FieldError),

    #[error("{action} failed: {error}")]
    Rejected {
        action: &'static str,
        error: GenericError,
    },

    #[error("Usage error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
