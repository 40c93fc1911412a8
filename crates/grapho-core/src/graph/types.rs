use crate::bail_unknown_algorithm;
use crate::error::{GraphoError, Result};
use crate::graph::Attrs;
use serde::{Deserialize, Serialize};

/// Opaque node identifier. Every value is a legal id; "no parent" is
/// expressed with `Option`, never with a reserved id.
pub type NodeId = u64;

/// Non-negative edge weight, path cost and heap priority
pub type Weight = u64;

/// Estimated remaining cost from a node to the goal: `h(node, goal)`.
///
/// Only A* consults it. An overestimating heuristic silently loses the
/// shortest-path guarantee; the engine does not check admissibility.
pub type Heuristic<'a> = &'a dyn Fn(NodeId, NodeId) -> Weight;

/// Heuristic used when none is supplied: always zero
pub fn null_heuristic(_node: NodeId, _goal: NodeId) -> Weight {
    0
}

/// Directed relation from one node to `to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

impl Edge {
    pub fn new(to: NodeId, weight: Weight) -> Self {
        Self {
            to,
            weight,
            attrs: Attrs::default(),
        }
    }
}

pub const SEARCH_ALGORITHMS: &str = "bfs, dfs, dijkstra, astar";
pub const MST_ALGORITHMS: &str = "prim, kruskal";

/// Search strategy: decides which open set drives the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// FIFO frontier: fewest edges
    #[serde(rename = "bfs", alias = "breadth-first")]
    BreadthFirst,
    /// LIFO frontier: children expanded left to right
    #[serde(rename = "dfs", alias = "depth-first")]
    DepthFirst,
    /// Heap frontier keyed by path cost
    #[default]
    Dijkstra,
    /// Heap frontier keyed by path cost plus heuristic
    #[serde(rename = "astar")]
    AStar,
}

impl SearchAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchAlgorithm::BreadthFirst => "bfs",
            SearchAlgorithm::DepthFirst => "dfs",
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::AStar => "astar",
        }
    }

    /// Whether the heuristic contributes to the push priority
    pub fn uses_heuristic(&self) -> bool {
        matches!(self, SearchAlgorithm::AStar)
    }
}

impl std::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchAlgorithm {
    type Err = GraphoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(SearchAlgorithm::DepthFirst),
            "dijkstra" => Ok(SearchAlgorithm::Dijkstra),
            "astar" | "a*" => Ok(SearchAlgorithm::AStar),
            other => bail_unknown_algorithm!("search", other, SEARCH_ALGORITHMS),
        }
    }
}

/// Minimum spanning tree construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Grow one tree from a start node using the priority queue
    #[default]
    Prim,
    /// Join forests along edges sorted by weight
    Kruskal,
}

impl MstAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "prim",
            MstAlgorithm::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MstAlgorithm {
    type Err = GraphoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MstAlgorithm::Prim),
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            other => bail_unknown_algorithm!("mst", other, MST_ALGORITHMS),
        }
    }
}
