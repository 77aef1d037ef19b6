//! Level path layout command.

use anyhow::{bail, Result};
use hackbee_layout::{position_on_vertical_sine_wave, PositionedNode, SineWaveOptions};
use serde::Serialize;

use super::LayoutArgs;
use crate::context::Context;
use crate::output::format_coord;

/// Payload carried by each laid-out node.
#[derive(Debug, Clone, Serialize)]
struct LayoutLabel {
    label: String,
}

/// Run the layout command.
pub async fn run(args: LayoutArgs, ctx: &Context) -> Result<()> {
    let labels = labels_from(&args)?;
    let options = options_from(&args, ctx.config.layout);

    let nodes: Vec<PositionedNode<LayoutLabel>> = labels
        .into_iter()
        .map(|label| PositionedNode::new(LayoutLabel { label }))
        .collect();
    let placed = position_on_vertical_sine_wave(&nodes, &options);

    if ctx.output.is_json() {
        ctx.output.json(&placed);
        return Ok(());
    }

    ctx.output.header(&format!("{} nodes", placed.len()));
    let widths = [12, 10, 10];
    ctx.output.table_row(&["label", "x", "y"], &widths);
    for node in &placed {
        let x = format_coord(node.position.x);
        let y = format_coord(node.position.y);
        ctx.output
            .table_row(&[node.data.label.as_str(), x.as_str(), y.as_str()], &widths);
    }
    Ok(())
}

fn labels_from(args: &LayoutArgs) -> Result<Vec<String>> {
    match args.count {
        Some(count) => Ok((1..=count).map(|i| i.to_string()).collect()),
        None if !args.labels.is_empty() => Ok(args.labels.clone()),
        None => bail!("Pass node labels or --count"),
    }
}

/// Command-line values win over the configured defaults.
fn options_from(args: &LayoutArgs, defaults: SineWaveOptions) -> SineWaveOptions {
    SineWaveOptions {
        amplitude: args.amplitude.unwrap_or(defaults.amplitude),
        vertical_gap: args.vertical_gap.unwrap_or(defaults.vertical_gap),
        start_y: args.start_y.unwrap_or(defaults.start_y),
        phase_offset: args.phase_offset.unwrap_or(defaults.phase_offset),
    }
}
