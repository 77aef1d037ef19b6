//! Progress display.

use anyhow::{bail, Result};
use hackbee_data::UserProgress;

use crate::context::Context;

/// Run the progress command.
pub async fn run(ctx: &Context) -> Result<()> {
    let endpoint = &ctx.config.api.progress_endpoint;
    let spinner = ctx.output.spinner("Loading progress");
    let progress: Option<UserProgress> = ctx.client().get(endpoint).await;
    spinner.finish_and_clear();

    let Some(progress) = progress else {
        bail!("Could not load progress from {}", endpoint);
    };

    if ctx.output.is_json() {
        ctx.output.json(&progress);
        return Ok(());
    }

    ctx.output.header("Progress");
    ctx.output
        .kv("highest completed", &progress.highest_completed.to_string());
    ctx.output.kv("xp", &progress.xp.to_string());
    ctx.output.kv("lives", &progress.lives.to_string());

    match progress.completed_questions {
        Some(ref questions) if !questions.is_empty() => {
            ctx.output.info(&format!("{} questions completed:", questions.len()));
            for question in questions {
                ctx.output.list_item(&question.to_string());
            }
        }
        _ => ctx.output.info("No completed questions recorded."),
    }

    Ok(())
}
