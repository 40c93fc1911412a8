//! CLI argument parsing for grapho
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use grapho_core::graph::{MstAlgorithm, NodeId, SearchAlgorithm};
pub use output::OutputFormat;
use parse::{parse_mst_algorithm, parse_search_algorithm};

/// Grapho - shortest paths and spanning trees for weighted graphs
#[derive(Parser, Debug)]
#[command(name = "grapho")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or a full
    /// directive such as `grapho_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./grapho.toml when present)
    #[arg(long, global = true, env = "GRAPHO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Path(PathArgs),

    /// Build a minimum spanning tree of an undirected graph
    Mst(MstArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (.toml or .json)
    pub graph: PathBuf,

    /// Start node
    #[arg(long)]
    pub from: NodeId,

    /// Goal node
    #[arg(long)]
    pub to: NodeId,

    /// Search strategy: bfs, dfs, dijkstra, astar
    #[arg(long, short, value_parser = parse_search_algorithm)]
    pub algorithm: Option<SearchAlgorithm>,
}

#[derive(Args, Debug, Clone)]
pub struct MstArgs {
    /// Graph document (.toml or .json)
    pub graph: PathBuf,

    /// Spanning tree algorithm: prim, kruskal
    #[arg(long, short, value_parser = parse_mst_algorithm)]
    pub algorithm: Option<MstAlgorithm>,

    /// Also write the tree as a graph document (.toml or .json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
