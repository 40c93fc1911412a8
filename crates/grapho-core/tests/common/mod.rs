//! Shared fixtures for the grapho-core integration tests

#![allow(dead_code)]

use grapho_core::graph::{Attrs, Graph, GraphProvider, NodeId, Weight};

/// Small deterministic generator so graph fixtures are reproducible
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Graph over nodes `1..=nodes` with `edges` random edges of weight
/// `1..=max_weight`. Undirected graphs also get a spanning chain, so they
/// are always connected.
pub fn random_graph(
    rng: &mut Lcg,
    directed: bool,
    nodes: u64,
    edges: usize,
    max_weight: Weight,
) -> Graph {
    let mut g = Graph::new(directed);
    for id in 1..=nodes {
        g.add_node(id, Attrs::default());
    }
    if !directed {
        for id in 1..nodes {
            g.add_edge(id, id + 1, 1 + rng.below(max_weight), Attrs::default());
        }
    }
    for _ in 0..edges {
        let from = 1 + rng.below(nodes);
        let to = 1 + rng.below(nodes);
        if from != to {
            g.add_edge(from, to, 1 + rng.below(max_weight), Attrs::default());
        }
    }
    g
}

/// All-pairs shortest distances by Floyd-Warshall, indexed by node id.
/// With `unit` every edge costs 1, giving hop counts.
pub fn all_pairs(graph: &Graph, unit: bool) -> Vec<Vec<Option<Weight>>> {
    let ids = graph.node_ids();
    let size = ids.iter().max().map_or(0, |max| *max as usize + 1);
    let mut dist = vec![vec![None; size]; size];

    for id in &ids {
        dist[*id as usize][*id as usize] = Some(0);
        for edge in graph.edges_from(*id).unwrap_or_default() {
            let w = if unit { 1 } else { edge.weight };
            let slot = &mut dist[*id as usize][edge.to as usize];
            *slot = Some(slot.map_or(w, |d: Weight| d.min(w)));
        }
    }

    for k in &ids {
        for i in &ids {
            for j in &ids {
                let (k, i, j) = (*k as usize, *i as usize, *j as usize);
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

/// Check that `path` runs from `start` to `goal` along existing edges and
/// return its total weight
pub fn walk(graph: &Graph, path: &[NodeId], start: NodeId, goal: NodeId) -> Weight {
    assert_eq!(path.first(), Some(&start), "path {:?}", path);
    assert_eq!(path.last(), Some(&goal), "path {:?}", path);
    path.windows(2)
        .map(|pair| {
            graph
                .edge(pair[0], pair[1])
                .unwrap_or_else(|| panic!("missing edge {} -> {}", pair[0], pair[1]))
                .weight
        })
        .sum()
}

/// Minimum spanning tree weight by trying every subset of `|V| - 1` edges
pub fn brute_force_mst_weight(graph: &Graph) -> Weight {
    let ids = graph.node_ids();
    let edges: Vec<(NodeId, NodeId, Weight)> = graph
        .edges()
        .into_iter()
        .filter(|(from, e)| *from != e.to)
        .map(|(from, e)| (from, e.to, e.weight))
        .collect();
    assert!(edges.len() <= 16, "too many edges to enumerate");

    let need = ids.len().saturating_sub(1);
    let mut best = Weight::MAX;
    for mask in 0u32..(1u32 << edges.len()) {
        if mask.count_ones() as usize != need {
            continue;
        }
        let mut tree = Graph::undirected();
        for id in &ids {
            tree.add_node(*id, Attrs::default());
        }
        let mut weight = 0;
        for (i, (from, to, w)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                tree.add_edge(*from, *to, *w, Attrs::default());
                weight += w;
            }
        }
        // |V| - 1 edges that connect every node form a tree
        if weight < best && grapho_core::graph::is_connected(&tree) {
            best = weight;
        }
    }
    best
}
