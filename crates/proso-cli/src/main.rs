//! proso - session client for the proso learning backend
//!
//! Drives a [`SessionStore`] from the command line: every invocation
//! initializes the session, runs one command and prints the outcome as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Own profile and level
//! proso profile --pretty
//!
//! # Someone else's profile
//! proso profile alice
//!
//! # Edit your profile
//! proso save --set first_name=Alice --set last_name=Smith
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod runner;


pub(crate) use error::{CliError, Result as CliResult};

use crate::cli::Cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, error};
use proso_config::Config;
use proso_core::ProfilePatch;
use proso_session::{FileCache, HttpBackend, SessionOptions, SessionStore, SignupPromotion};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match execute(cli).await {
        Ok(output) => {
            let printed = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            };
            match printed {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    // Explicit flag > PROSO_API_BASE_URL > config.toml > default
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let store = build_store(&config)?;
    let promotion = SignupPromotion::from_config(&config.signup);

    store.init(ProfilePatch::default());
    store.settled().await;
    debug!("Session ready for '{}'", store.current().username);

    runner::run(cli.command, &store, &promotion).await
}

fn build_store(config: &Config) -> CliResult<SessionStore> {
    let backend = HttpBackend::from_config(&config.api)?;
    let cache = FileCache::new(config.cache_path()?);
    Ok(SessionStore::new(
        Arc::new(backend),
        Arc::new(cache),
        SessionOptions::from(config),
    ))
}
