use crate::{CliError, CliResult};

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// Show a profile (your own when NAME is omitted)
    Profile {
        name: Option<String>,
    },

    /// Log in with username and password
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Repeat of the password; defaults to --password
        #[arg(long)]
        password_check: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },

    /// End the session
    Logout,

    /// Record an answer locally (optimistic; not sent to the backend)
    Answer {
        #[arg(long)]
        correct: bool,
    },

    /// Show level progress for the current user or a point total
    Level {
        #[arg(long)]
        points: Option<u64>,
    },

    /// Edit and save profile fields
    Save {
        /// Field assignment, e.g. --set first_name=Alice (repeatable)
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        assignments: Vec<(String, String)>,
    },

    /// Bootstrap a session through the mobile endpoint
    MobileInit,
}

/// Parse `key=value`
pub(crate) fn parse_assignment(raw: &str) -> CliResult<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::usage(format!("expected key=value, got '{raw}'")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::usage(format!("missing field name in '{raw}'")));
    }
    Ok((key.to_string(), value.to_string()))
}
