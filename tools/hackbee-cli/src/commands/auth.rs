//! Token management commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Password};
use hackbee_storage::{access_token, Store, ACCESS_TOKEN_KEY};

use super::{LoginArgs, LogoutArgs};
use crate::context::Context;

/// Store an access token.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let token = match args.token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Access token")
            .interact()
            .context("Failed to read token")?,
    };

    let token = token.trim();
    if token.is_empty() {
        bail!("Access token is empty");
    }

    let store = ctx.store();
    store
        .set(ACCESS_TOKEN_KEY, token)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;

    ctx.output.debug(&format!("Token stored in {}", store.path().display()));
    ctx.output.success("Logged in");
    Ok(())
}

/// Remove the stored access token.
pub async fn logout(args: LogoutArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store();
    let existing = access_token(&store)
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    if existing.is_none() {
        ctx.output.warn("Not logged in.");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove the stored access token?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            ctx.output.info("Cancelled.");
            return Ok(());
        }
    }

    store
        .delete(ACCESS_TOKEN_KEY)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;

    ctx.output.success("Logged out");
    Ok(())
}
