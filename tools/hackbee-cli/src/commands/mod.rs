//! CLI command implementations.

pub mod auth;
pub mod config;
pub mod fetch;
pub mod layout;
pub mod progress;
pub mod shuffle;

use clap::{Args, Subcommand};

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// Endpoint appended to the base URL (e.g. `/users/me`).
    pub endpoint: String,

    /// HTTP method.
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Extra header as `Name: value` (repeatable).
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body, sent as-is.
    #[arg(short, long)]
    pub data: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Access token (prompted for when omitted).
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Arguments for the logout command.
#[derive(Args)]
pub struct LogoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the shuffle command.
#[derive(Args)]
pub struct ShuffleArgs {
    /// Items to shuffle.
    pub items: Vec<String>,
}

/// Arguments for the layout command.
#[derive(Args)]
pub struct LayoutArgs {
    /// Node labels, laid out top to bottom.
    pub labels: Vec<String>,

    /// Generate this many numbered nodes instead of passing labels.
    #[arg(short = 'n', long, conflicts_with = "labels")]
    pub count: Option<usize>,

    /// Horizontal swing (default from config).
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Gap between nodes on the y axis (default from config).
    #[arg(long)]
    pub vertical_gap: Option<f64>,

    /// y of the first node (default from config).
    #[arg(long)]
    pub start_y: Option<f64>,

    /// Phase offset in radians (default from config).
    #[arg(long, allow_hyphen_values = true)]
    pub phase_offset: Option<f64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the config file in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
