//! `altpath solve` / `altpath run` - compute alternating distances
//!
//! Source vertex precedence: `--source`, then the document's `source`,
//! then the config's `source`, then 0.

use altpath_core::error::Result;
use altpath_core::format::OutputFormat;
use altpath_core::input::GraphInput;

use crate::commands::dispatch::CommandContext;
use crate::commands::render::{render_human, render_json, render_records, DistanceReport};

/// Pick the source vertex before validation
fn requested_source(ctx: &CommandContext, input: &GraphInput, flag: Option<i64>) -> i64 {
    flag.or(input.source)
        .or_else(|| {
            ctx.config
                .source
                .map(|s| i64::try_from(s).unwrap_or(i64::MAX))
        })
        .unwrap_or(0)
}

#[tracing::instrument(skip(ctx, input), fields(n = input.n, red = input.red.len(), blue = input.blue.len()))]
pub fn execute(ctx: &CommandContext, input: &GraphInput, source_flag: Option<i64>) -> Result<()> {
    let graph = input.to_graph()?;
    let source = input.check_source(requested_source(ctx, input, source_flag))?;

    let outcome = graph.search_from(source)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "search");

    let report = DistanceReport::new(&graph, &outcome, &ctx.config.labels);
    match ctx.format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Human => print!("{}", render_human(&report, ctx.cli.quiet)),
        OutputFormat::Records => print!("{}", render_records(&report)),
    }
    Ok(())
}
