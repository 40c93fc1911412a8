use crate::container::OpenSet;
use crate::error::{GraphoError, Result};
use crate::graph::algos::shared::{CancelToken, TraversalStats};
use crate::graph::path::ClosedSet;
use crate::graph::types::{null_heuristic, Heuristic, NodeId, SearchAlgorithm, Weight};
use crate::graph::GraphProvider;
use crate::log_traversal_stats;

/// Open-set entry: a node, the node it was reached from, and the path cost
/// accumulated to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchState {
    node: NodeId,
    parent: Option<NodeId>,
    cost: Weight,
}

/// Parameters for one traversal
#[derive(Clone, Copy, Default)]
pub struct SearchOptions<'a> {
    pub algorithm: SearchAlgorithm,
    /// Consulted by A* only; `None` behaves like the zero heuristic
    pub heuristic: Option<Heuristic<'a>>,
    /// Checked once per loop iteration
    pub cancel: Option<&'a CancelToken>,
}

impl<'a> SearchOptions<'a> {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic<'a>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl std::fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOptions")
            .field("algorithm", &self.algorithm)
            .field("heuristic", &self.heuristic.is_some())
            .field("cancel", &self.cancel)
            .finish()
    }
}

/// The expansion loop shared by every search strategy.
///
/// With `goal = Some(g)` the loop stops as soon as `g` is expanded
/// (immediately when `start == g`). With `goal = None` every node reachable
/// from `start` is expanded. The returned closed set belongs to this run
/// only.
pub(crate) fn traverse<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: Option<NodeId>,
    opts: &SearchOptions<'_>,
) -> Result<(ClosedSet, TraversalStats)> {
    let heuristic: Heuristic<'_> = match opts.heuristic {
        Some(h) if opts.algorithm.uses_heuristic() => h,
        _ => &null_heuristic,
    };

    let mut open = OpenSet::for_algorithm(opts.algorithm);
    let mut closed = ClosedSet::new();
    let mut stats = TraversalStats::default();

    open.push(
        SearchState {
            node: start,
            parent: None,
            cost: 0,
        },
        0,
    );
    stats.pushed += 1;

    while let Some(state) = open.pop() {
        if let Some(cancel) = opts.cancel {
            cancel.check()?;
        }

        // First pop wins; anything later for this node is stale
        if !closed.insert(state.node, state.parent) {
            stats.stale += 1;
            continue;
        }
        stats.expanded += 1;
        tracing::trace!(node = state.node, parent = ?state.parent, cost = state.cost, "expand");

        if goal == Some(state.node) {
            break;
        }

        let Some(mut successors) = graph.neighbors(state.node) else {
            tracing::debug!(node = state.node, "no adjacency for expanded node, skipping");
            stats.skipped += 1;
            continue;
        };

        // LIFO reinsertion would otherwise expand children right to left
        if opts.algorithm == SearchAlgorithm::DepthFirst {
            successors.reverse();
        }

        for child in successors {
            if closed.contains(child) {
                continue;
            }
            let Some(edge) = graph.edge(state.node, child) else {
                continue;
            };

            let cost = state.cost.saturating_add(edge.weight);
            let priority = match goal {
                Some(goal) => cost.saturating_add(heuristic(child, goal)),
                None => cost,
            };
            open.push(
                SearchState {
                    node: child,
                    parent: Some(state.node),
                    cost,
                },
                priority,
            );
            stats.pushed += 1;
        }
    }

    Ok((closed, stats))
}

/// Find a path from `start` to `goal` with the strategy and options given.
///
/// Returns the node sequence `start..=goal`, or `PathNotFound` if the open
/// set runs dry first. `start == goal` yields `[start]`.
#[tracing::instrument(skip(graph, opts), fields(algorithm = %opts.algorithm))]
pub fn search_with<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
    opts: &SearchOptions<'_>,
) -> Result<Vec<NodeId>> {
    let (closed, stats) = traverse(graph, start, Some(goal), opts)?;
    log_traversal_stats!(stats, "search");

    closed
        .path_to(start, goal)
        .ok_or(GraphoError::PathNotFound { start, goal })
}

/// Find a path from `start` to `goal`.
///
/// `heuristic` is only used by [`SearchAlgorithm::AStar`].
pub fn search<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
    algorithm: SearchAlgorithm,
    heuristic: Option<Heuristic<'_>>,
) -> Result<Vec<NodeId>> {
    let opts = SearchOptions {
        algorithm,
        heuristic,
        cancel: None,
    };
    search_with(graph, start, goal, &opts)
}

/// Path with the fewest edges
pub fn breadth_first_search<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    search(graph, start, goal, SearchAlgorithm::BreadthFirst, None)
}

/// First path found by expanding children left to right, deepest first
pub fn depth_first_search<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    search(graph, start, goal, SearchAlgorithm::DepthFirst, None)
}

/// Cheapest path by total edge weight
pub fn dijkstra<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    search(graph, start, goal, SearchAlgorithm::Dijkstra, None)
}

/// Cheapest path, guided by `heuristic`
pub fn astar<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
    heuristic: Heuristic<'_>,
) -> Result<Vec<NodeId>> {
    search(graph, start, goal, SearchAlgorithm::AStar, Some(heuristic))
}

/// Expand every node reachable from `start` and return the closed set
#[tracing::instrument(skip(graph, opts), fields(algorithm = %opts.algorithm))]
pub fn explore_with<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    opts: &SearchOptions<'_>,
) -> Result<ClosedSet> {
    let (closed, stats) = traverse(graph, start, None, opts)?;
    log_traversal_stats!(stats, "explore");
    Ok(closed)
}

/// Expand every node reachable from `start` using `algorithm`
pub fn explore<G: GraphProvider + ?Sized>(
    graph: &G,
    start: NodeId,
    algorithm: SearchAlgorithm,
) -> Result<ClosedSet> {
    explore_with(graph, start, &SearchOptions::new(algorithm))
}
