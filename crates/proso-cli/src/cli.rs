use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "proso")]
#[command(about = "Session client for the proso learning backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
