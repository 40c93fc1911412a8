//! In-memory adjacency-list graph

use crate::graph::{Attrs, Edge, GraphProvider, NodeId, Weight};
use std::collections::BTreeMap;

/// A weighted graph stored as an adjacency list per node.
///
/// Nodes enumerate in ascending id order; each node's edges keep insertion
/// order, which is the order `neighbors` reports them in. An undirected
/// graph stores every edge once in each direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    directed: bool,
    nodes: BTreeMap<NodeId, Attrs>,
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Insert a node, or replace the attributes of an existing one
    pub fn add_node(&mut self, id: NodeId, attrs: Attrs) {
        self.nodes.insert(id, attrs);
        self.adjacency.entry(id).or_default();
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add the edge `from -> to` (and `to -> from` when undirected).
    ///
    /// Missing endpoints are created with empty attributes. Re-adding an
    /// existing edge replaces its weight and attributes in place.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight, attrs: Attrs) {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                self.add_node(id, Attrs::default());
            }
        }

        if !self.directed && from != to {
            self.upsert_edge(
                to,
                Edge {
                    to: from,
                    weight,
                    attrs: attrs.clone(),
                },
            );
        }
        self.upsert_edge(from, Edge { to, weight, attrs });
    }

    fn upsert_edge(&mut self, from: NodeId, edge: Edge) {
        let edges = self.adjacency.entry(from).or_default();
        match edges.iter_mut().find(|e| e.to == edge.to) {
            Some(existing) => *existing = edge,
            None => edges.push(edge),
        }
    }

    /// Remove a node and every edge touching it. Returns its attributes.
    pub fn delete_node(&mut self, id: NodeId) -> Option<Attrs> {
        let attrs = self.nodes.remove(&id)?;
        self.adjacency.remove(&id);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.to != id);
        }
        Some(attrs)
    }

    /// Remove the edge `from -> to` (both directions when undirected).
    /// Returns whether an edge was removed.
    pub fn delete_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let removed = self.remove_directed(from, to);
        if !self.directed {
            self.remove_directed(to, from);
        }
        removed
    }

    fn remove_directed(&mut self, from: NodeId, to: NodeId) -> bool {
        match self.adjacency.get_mut(&from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|e| e.to != to);
                edges.len() != before
            }
            None => false,
        }
    }

    /// Outgoing edges of `id`, in insertion order
    pub fn edges_from(&self, id: NodeId) -> Option<&[Edge]> {
        self.adjacency.get(&id).map(Vec::as_slice)
    }

    /// Every edge as `(from, edge)`. Undirected edges are reported once,
    /// from the smaller endpoint.
    pub fn edges(&self) -> Vec<(NodeId, &Edge)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (*from, e)))
            .filter(|(from, e)| self.directed || *from <= e.to)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Sum of all edge weights (undirected edges counted once)
    pub fn total_weight(&self) -> Weight {
        self.edges()
            .iter()
            .fold(0, |acc: Weight, (_, e)| acc.saturating_add(e.weight))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: NodeId) -> Option<Vec<NodeId>> {
        self.adjacency
            .get(&id)
            .map(|edges| edges.iter().map(|e| e.to).collect())
    }

    fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.adjacency.get(&from)?.iter().find(|e| e.to == to)
    }

    fn node(&self, id: NodeId) -> Option<&Attrs> {
        self.nodes.get(&id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
