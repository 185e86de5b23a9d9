//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod fetch;
pub mod init;
pub mod status;

pub use args::{FetchArgs, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// lifollow - LinkedIn organization follower statistics from the terminal
#[derive(Parser, Debug)]
#[command(name = "lifollow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "LIFOLLOW_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "LIFOLLOW_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom LinkedIn API root (development/testing)
    #[arg(long, global = true, env = "LIFOLLOW_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LIFOLLOW_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the current follower counts for an organization
    Fetch(FetchArgs),

    /// Store a default access token and organization
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}
