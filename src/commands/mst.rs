//! `grapho mst` command - minimum spanning tree of an undirected graph

use crate::cli::{MstArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::load_document;
use grapho_core::error::Result;
use grapho_core::graph::{minimum_spanning_tree_with, Graph, MstOptions};

/// Execute the mst command
pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let algorithm = args.algorithm.unwrap_or(ctx.config.mst.algorithm);
    let graph = load_document(&args.graph)?.into_graph();

    let opts = MstOptions::new(algorithm).with_cancel(&ctx.cancel);
    let mst = minimum_spanning_tree_with(&graph, &opts)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), %algorithm, "mst");

    if let Some(output) = &args.output {
        mst.to_document().save(output)?;
        if !ctx.cli.quiet {
            eprintln!("wrote {}", output.display());
        }
    }

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", mst.to_document().to_json()?),
        OutputFormat::Human => print!("{}", format_tree(&mst)),
    }

    Ok(())
}

/// One `from - to (weight)` line per edge, then the total
fn format_tree(mst: &Graph) -> String {
    let mut out = String::new();
    for (from, edge) in mst.edges() {
        out.push_str(&format!("{} - {} ({})\n", from, edge.to, edge.weight));
    }
    out.push_str(&format!("total weight: {}\n", mst.total_weight()));
    out
}
