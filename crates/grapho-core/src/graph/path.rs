//! Closed set and path reconstruction

use crate::graph::{GraphProvider, NodeId, Weight};
use std::collections::HashMap;

/// Nodes expanded during one traversal, each mapped to the node it was
/// reached from (`None` for the start node).
///
/// A node enters exactly once: the first time it is popped from the open
/// set. Later pops of the same node are stale and never overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedSet {
    parents: HashMap<NodeId, Option<NodeId>>,
    order: Vec<NodeId>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` as expanded. Returns `false` (and changes nothing) if
    /// it was already expanded.
    pub fn insert(&mut self, node: NodeId, parent: Option<NodeId>) -> bool {
        if self.parents.contains_key(&node) {
            return false;
        }
        self.parents.insert(node, parent);
        self.order.push(node);
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// `Some(None)` for the start node, `None` for a node never expanded
    pub fn parent(&self, node: NodeId) -> Option<Option<NodeId>> {
        self.parents.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Expanded nodes in expansion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// Walk parent links back from `goal` to `start` and return the path in
    /// start-to-goal order. `None` if `goal` was never expanded or the chain
    /// does not lead back to `start`.
    pub fn path_to(&self, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![goal];
        let mut current = goal;

        while current != start {
            match self.parents.get(&current)? {
                Some(parent) => {
                    current = *parent;
                    path.push(current);
                }
                None => return None,
            }
            // A chain longer than the set itself means a cycle
            if path.len() > self.order.len() {
                return None;
            }
        }

        if !self.contains(goal) {
            return None;
        }

        path.reverse();
        Some(path)
    }
}

/// Sum of edge weights along `path`. `None` if two consecutive nodes are
/// not joined by an edge.
pub fn path_cost<G: GraphProvider + ?Sized>(graph: &G, path: &[NodeId]) -> Option<Weight> {
    path.windows(2).try_fold(0, |acc: Weight, pair| {
        let edge = graph.edge(pair[0], pair[1])?;
        Some(acc.saturating_add(edge.weight))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(entries: &[(NodeId, Option<NodeId>)]) -> ClosedSet {
        let mut set = ClosedSet::new();
        for (node, parent) in entries {
            set.insert(*node, *parent);
        }
        set
    }

    #[test]
    fn test_first_insert_wins() {
        let mut set = ClosedSet::new();
        assert!(set.insert(4, Some(2)));
        assert!(!set.insert(4, Some(3)));
        assert_eq!(set.parent(4), Some(Some(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_start_parent_is_none() {
        let set = closed(&[(1, None)]);
        assert_eq!(set.parent(1), Some(None));
        assert_eq!(set.parent(2), None);
    }

    #[test]
    fn test_node_zero_is_a_regular_id() {
        let set = closed(&[(5, None), (0, Some(5)), (7, Some(0))]);
        assert_eq!(set.path_to(5, 7), Some(vec![5, 0, 7]));
    }

    #[test]
    fn test_path_to_reverses_parent_chain() {
        let set = closed(&[(1, None), (2, Some(1)), (3, Some(1)), (4, Some(2)), (5, Some(4))]);
        assert_eq!(set.path_to(1, 5), Some(vec![1, 2, 4, 5]));
        assert_eq!(set.path_to(1, 3), Some(vec![1, 3]));
    }

    #[test]
    fn test_path_to_start_is_single_node() {
        let set = closed(&[(1, None)]);
        assert_eq!(set.path_to(1, 1), Some(vec![1]));
    }

    #[test]
    fn test_path_to_unexpanded_goal() {
        let set = closed(&[(1, None), (2, Some(1))]);
        assert_eq!(set.path_to(1, 6), None);
    }

    #[test]
    fn test_path_to_other_root() {
        let set = closed(&[(1, None), (2, Some(1))]);
        assert_eq!(set.path_to(9, 2), None);
    }

    #[test]
    fn test_path_cost() {
        use crate::graph::{Attrs, Graph};

        let mut g = Graph::directed();
        g.add_edge(1, 2, 3, Attrs::default());
        g.add_edge(2, 4, 5, Attrs::default());

        assert_eq!(path_cost(&g, &[1, 2, 4]), Some(8));
        assert_eq!(path_cost(&g, &[1]), Some(0));
        assert_eq!(path_cost(&g, &[4, 2]), None);
    }

    #[test]
    fn test_nodes_in_expansion_order() {
        let set = closed(&[(3, None), (1, Some(3)), (2, Some(3))]);
        assert_eq!(set.nodes(), &[3, 1, 2]);
        assert!(!set.is_empty());
    }
}
