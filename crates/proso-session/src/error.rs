use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the backend or the client cache
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request rejected with status {status}: {body} {location}")]
    Rejected {
        status: u16,
        body: Value,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Background task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write session cache at {path}: {source} {location}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SessionError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SessionError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_join(err: tokio::task::JoinError) -> Self {
        SessionError::Task {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(status: u16, body: Value) -> Self {
        SessionError::Rejected {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(url: &str, message: S) -> Self {
        SessionError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cache_write(path: PathBuf, source: std::io::Error) -> Self {
        SessionError::CacheWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Body of a rejected response, if this is one
    pub fn rejection_body(&self) -> Option<&Value> {
        match self {
            SessionError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SessionError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SessionError::from_json(err)
    }
}

pub type Result<T> = StdResult<T, SessionError>;
