//! Shuffle command.

use anyhow::{bail, Result};
use hackbee_layout::shuffle;

use super::ShuffleArgs;
use crate::context::Context;

/// Run the shuffle command.
pub async fn run(args: ShuffleArgs, ctx: &Context) -> Result<()> {
    if args.items.is_empty() {
        bail!("Nothing to shuffle; pass one or more items");
    }

    let shuffled = shuffle(&args.items);

    if ctx.output.is_json() {
        ctx.output.json(&shuffled);
        return Ok(());
    }

    for item in &shuffled {
        ctx.output.list_item(item);
    }
    Ok(())
}
