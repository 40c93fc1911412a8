use crate::graph::{Attrs, Edge, NodeId};

/// Read-only view of a graph, as consumed by the search and spanning tree
/// algorithms.
///
/// Searches only need `neighbors` and `edge`; spanning tree construction
/// also enumerates nodes and copies their attributes.
pub trait GraphProvider {
    /// Successors of `id` in a stable order, or `None` if the node is absent
    fn neighbors(&self, id: NodeId) -> Option<Vec<NodeId>>;

    /// The edge `from -> to`, if present
    fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge>;

    /// Attributes of `id`, if the node is present
    fn node(&self, id: NodeId) -> Option<&Attrs>;

    /// All node ids, in ascending order
    fn node_ids(&self) -> Vec<NodeId>;

    fn node_count(&self) -> usize;

    fn is_directed(&self) -> bool;
}
