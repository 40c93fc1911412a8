use crate::container::PriorityQueue;
use crate::error::{GraphoError, Result};
use crate::graph::algos::search::{explore_with, SearchOptions};
use crate::graph::algos::shared::CancelToken;
use crate::graph::types::{MstAlgorithm, NodeId, SearchAlgorithm, Weight};
use crate::graph::{Graph, GraphProvider};
use std::collections::HashMap;

/// Heap entry for Prim: attach `node` to the tree through `parent`.
/// The priority is the weight of that connecting edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MstState {
    node: NodeId,
    parent: Option<NodeId>,
}

/// Whether every node is reachable from the first enumerated node.
///
/// For undirected graphs this is ordinary connectivity. The empty graph
/// counts as connected.
pub fn is_connected<G: GraphProvider + ?Sized>(graph: &G) -> bool {
    reachable_count(graph, None).is_ok_and(|reachable| reachable == graph.node_count())
}

fn reachable_count<G: GraphProvider + ?Sized>(
    graph: &G,
    cancel: Option<&CancelToken>,
) -> Result<usize> {
    let Some(start) = graph.node_ids().first().copied() else {
        return Ok(0);
    };

    let mut opts = SearchOptions::new(SearchAlgorithm::BreadthFirst);
    if let Some(cancel) = cancel {
        opts = opts.with_cancel(cancel);
    }
    Ok(explore_with(graph, start, &opts)?.len())
}

/// Fail fast unless the graph is undirected and connected
fn check_preconditions<G: GraphProvider + ?Sized>(
    graph: &G,
    cancel: Option<&CancelToken>,
) -> Result<()> {
    if graph.is_directed() {
        return Err(GraphoError::GraphNotUndirected);
    }

    let total = graph.node_count();
    let reachable = reachable_count(graph, cancel)?;
    if reachable != total {
        return Err(GraphoError::GraphNotConnected { reachable, total });
    }

    Ok(())
}

/// Parameters for one spanning tree build
#[derive(Debug, Clone, Copy, Default)]
pub struct MstOptions<'a> {
    pub algorithm: MstAlgorithm,
    /// Checked by the connectivity scan and once per step of the build
    pub cancel: Option<&'a CancelToken>,
}

impl<'a> MstOptions<'a> {
    pub fn new(algorithm: MstAlgorithm) -> Self {
        Self {
            algorithm,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Compute a minimum spanning tree of an undirected, connected graph.
///
/// The result is a new undirected graph holding every node (with its
/// attributes) and `|V| - 1` of the input edges. When several edges share a
/// weight the chosen tree is one of the minimum ones, not a canonical one.
pub fn minimum_spanning_tree<G: GraphProvider + ?Sized>(
    graph: &G,
    algorithm: MstAlgorithm,
) -> Result<Graph> {
    minimum_spanning_tree_with(graph, &MstOptions::new(algorithm))
}

/// Like [`minimum_spanning_tree`], but stops with `Interrupted` once the
/// cancel token fires. A cancelled build returns no partial tree.
#[tracing::instrument(skip(graph, opts), fields(algorithm = %opts.algorithm, nodes = graph.node_count()))]
pub fn minimum_spanning_tree_with<G: GraphProvider + ?Sized>(
    graph: &G,
    opts: &MstOptions<'_>,
) -> Result<Graph> {
    match opts.algorithm {
        MstAlgorithm::Prim => prim(graph, opts.cancel),
        MstAlgorithm::Kruskal => kruskal(graph, opts.cancel),
    }
}

fn check_cancel(cancel: Option<&CancelToken>) -> Result<()> {
    match cancel {
        Some(cancel) => cancel.check(),
        None => Ok(()),
    }
}

/// Prim's algorithm over the binary heap, with lazy deletion of entries
/// whose node already joined the tree
pub fn prim_mst<G: GraphProvider + ?Sized>(graph: &G) -> Result<Graph> {
    prim(graph, None)
}

fn prim<G: GraphProvider + ?Sized>(graph: &G, cancel: Option<&CancelToken>) -> Result<Graph> {
    check_preconditions(graph, cancel)?;

    let mut mst = Graph::undirected();
    let Some(start) = graph.node_ids().first().copied() else {
        return Ok(mst);
    };

    let mut heap = PriorityQueue::with_capacity(graph.node_count());
    heap.push(
        MstState {
            node: start,
            parent: None,
        },
        0,
    );
    let mut stale = 0usize;

    while let Some(MstState { node, parent }) = heap.pop() {
        check_cancel(cancel)?;

        if mst.contains_node(node) {
            stale += 1;
            continue;
        }

        mst.add_node(node, graph.node(node).cloned().unwrap_or_default());
        if let Some(parent) = parent {
            if let Some(edge) = graph.edge(parent, node) {
                mst.add_edge(parent, node, edge.weight, edge.attrs.clone());
            }
        }

        for succ in graph.neighbors(node).unwrap_or_default() {
            if mst.contains_node(succ) {
                continue;
            }
            if let Some(edge) = graph.edge(node, succ) {
                heap.push(
                    MstState {
                        node: succ,
                        parent: Some(node),
                    },
                    edge.weight,
                );
            }
        }
    }

    tracing::debug!(
        nodes = mst.node_count(),
        edges = mst.edge_count(),
        weight = mst.total_weight(),
        stale,
        "prim_mst"
    );
    Ok(mst)
}

/// Union-find over dense indices, with path halving and union by size
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merge the sets of `a` and `b`; `false` if they were already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// Kruskal's algorithm: scan edges by ascending weight and keep those that
/// join two different components
pub fn kruskal_mst<G: GraphProvider + ?Sized>(graph: &G) -> Result<Graph> {
    kruskal(graph, None)
}

fn kruskal<G: GraphProvider + ?Sized>(graph: &G, cancel: Option<&CancelToken>) -> Result<Graph> {
    check_preconditions(graph, cancel)?;

    let ids = graph.node_ids();
    let index: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let mut mst = Graph::undirected();
    for id in &ids {
        mst.add_node(*id, graph.node(*id).cloned().unwrap_or_default());
    }

    // Each undirected edge once, from its smaller endpoint
    let mut candidates: Vec<(Weight, NodeId, NodeId)> = Vec::new();
    for from in &ids {
        for to in graph.neighbors(*from).unwrap_or_default() {
            if *from < to {
                if let Some(edge) = graph.edge(*from, to) {
                    candidates.push((edge.weight, *from, to));
                }
            }
        }
    }
    candidates.sort_unstable();

    let mut forest = DisjointSet::new(ids.len());
    let target = ids.len().saturating_sub(1);
    let mut kept = 0usize;
    for (weight, from, to) in candidates {
        if kept == target {
            break;
        }
        check_cancel(cancel)?;
        let (Some(a), Some(b)) = (index.get(&from), index.get(&to)) else {
            continue;
        };
        if forest.union(*a, *b) {
            let attrs = graph
                .edge(from, to)
                .map(|e| e.attrs.clone())
                .unwrap_or_default();
            mst.add_edge(from, to, weight, attrs);
            kept += 1;
        }
    }

    tracing::debug!(
        nodes = mst.node_count(),
        edges = mst.edge_count(),
        weight = mst.total_weight(),
        "kruskal_mst"
    );
    Ok(mst)
}
