//! `grapho path` command - find a path between two nodes
//!
//! The algorithm comes from `--algorithm`, then `[search] algorithm` in the
//! config. A* reads its estimates from the document's `[[heuristic]]`
//! table: entries whose `goal` matches `--to`, plus entries with no goal.
//! Nodes without an applicable entry estimate zero.

use serde::Serialize;

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::load_document;
use grapho_core::error::{GraphoError, Result};
use grapho_core::graph::{path_cost, search_with, NodeId, SearchAlgorithm, SearchOptions, Weight};

#[derive(Debug, Serialize)]
struct PathOutput {
    from: NodeId,
    to: NodeId,
    algorithm: SearchAlgorithm,
    path: Vec<NodeId>,
    cost: Weight,
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let algorithm = args.algorithm.unwrap_or(ctx.config.search.algorithm);

    let doc = load_document(&args.graph)?;
    let estimates = doc.heuristic_map(args.to)?;
    let graph = doc.into_graph();

    for id in [args.from, args.to] {
        if !graph.contains_node(id) {
            return Err(GraphoError::NodeNotFound { id });
        }
    }

    let heuristic = |node: NodeId, _goal: NodeId| estimates.get(&node).copied().unwrap_or(0);
    let mut opts = SearchOptions::new(algorithm).with_cancel(&ctx.cancel);
    if algorithm.uses_heuristic() {
        if estimates.is_empty() {
            tracing::debug!(goal = args.to, "no estimates for this goal, A* falls back to zero");
        } else {
            opts = opts.with_heuristic(&heuristic);
        }
    }

    let path = search_with(&graph, args.from, args.to, &opts)?;
    let cost = path_cost(&graph, &path).unwrap_or_default();

    tracing::debug!(elapsed = ?ctx.start.elapsed(), hops = path.len() - 1, cost, "path");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = PathOutput {
                from: args.from,
                to: args.to,
                algorithm,
                path,
                cost,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", format_path(&path));
            if !ctx.cli.quiet {
                println!("cost: {}", cost);
            }
        }
    }

    Ok(())
}

fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
