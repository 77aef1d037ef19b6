//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Path => show_path(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output
        .kv("progress_endpoint", &ctx.config.api.progress_endpoint);

    ctx.output.info("[storage]");
    ctx.output
        .kv("path", &ctx.storage_path().display().to_string());

    ctx.output.info("[logging]");
    ctx.output
        .kv("level", &ctx.config.logging.level.to_string().to_lowercase());
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    let layout = &ctx.config.layout;
    ctx.output.info("[layout]");
    ctx.output.kv("amplitude", &layout.amplitude.to_string());
    ctx.output.kv("vertical_gap", &layout.vertical_gap.to_string());
    ctx.output.kv("start_y", &layout.start_y.to_string());
    ctx.output.kv("phase_offset", &layout.phase_offset.to_string());

    Ok(())
}

async fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_file {
        Some(path) => println!("{}", path.display()),
        None => ctx
            .output
            .warn("No config file found; using defaults. Run `hackbee config init`."),
    }
    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("hackbee.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}
