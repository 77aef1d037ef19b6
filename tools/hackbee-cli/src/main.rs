//! HackBee CLI - Command line client for the HackBee API.
//!
//! Commands:
//! - `hackbee fetch` - Call an API endpoint with the stored token
//! - `hackbee progress` - Show the current user's progress
//! - `hackbee login` / `hackbee logout` - Manage the stored access token
//! - `hackbee shuffle` - Shuffle a list of items
//! - `hackbee layout` - Lay nodes out along the level path
//! - `hackbee config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FetchArgs, LayoutArgs, LoginArgs, LogoutArgs, ShuffleArgs};

/// HackBee CLI - Talk to the HackBee API from the terminal
#[derive(Parser)]
#[command(name = "hackbee")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call an API endpoint and print the JSON response
    Fetch(FetchArgs),

    /// Show the current user's progress
    Progress,

    /// Store an access token
    Login(LoginArgs),

    /// Remove the stored access token
    Logout(LogoutArgs),

    /// Print a shuffled copy of the given items
    Shuffle(ShuffleArgs),

    /// Position nodes along the vertical level path
    Layout(LayoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args, &ctx).await,
        Commands::Progress => commands::progress::run(&ctx).await,
        Commands::Login(args) => commands::auth::login(args, &ctx).await,
        Commands::Logout(args) => commands::auth::logout(args, &ctx).await,
        Commands::Shuffle(args) => commands::shuffle::run(args, &ctx).await,
        Commands::Layout(args) => commands::layout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
