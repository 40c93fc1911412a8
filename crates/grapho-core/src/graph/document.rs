//! On-disk graph format
//!
//! A graph file is TOML or JSON, chosen by extension (`.json` is JSON,
//! anything else TOML):
//!
//! ```toml
//! directed = false
//!
//! [[nodes]]
//! id = 1
//! attrs = { name = "depot" }
//!
//! [[edges]]
//! from = 1
//! to = 2
//! weight = 4
//!
//! [[heuristic]]
//! node = 2
//! goal = 3
//! estimate = 3
//! ```
//!
//! Nodes that only appear as edge endpoints are created implicitly.
//!
//! A heuristic entry with a `goal` only applies to searches toward that
//! goal. An entry without one applies to every goal, so it must be
//! admissible for all of them.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{Attrs, Graph, GraphProvider, NodeId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,

    #[serde(default)]
    pub nodes: Vec<NodeEntry>,

    #[serde(default)]
    pub edges: Vec<EdgeEntry>,

    /// Per-node estimates of the remaining cost, used to drive A*
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heuristic: Vec<HeuristicEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

fn default_weight() -> Weight {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicEntry {
    pub node: NodeId,
    /// Goal the estimate was computed for; `None` means any goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<NodeId>,
    pub estimate: Weight,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl GraphDocument {
    /// Load a graph document from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Save a graph document, in the format implied by the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            self.to_json()?
        } else {
            toml::to_string_pretty(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the in-memory graph. Later entries win over earlier ones for
    /// the same node or edge.
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new(self.directed);
        for node in &self.nodes {
            graph.add_node(node.id, node.attrs.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight, edge.attrs.clone());
        }
        graph
    }

    pub fn into_graph(self) -> Graph {
        self.to_graph()
    }

    /// Estimates that apply to searches toward `goal`, as a lookup map.
    ///
    /// Entries for this goal override goal-less ones; entries for other
    /// goals are ignored. Rejects two entries with the same node and goal.
    pub fn heuristic_map(&self, goal: NodeId) -> Result<HashMap<NodeId, Weight>> {
        let mut any_goal = HashMap::new();
        let mut this_goal = HashMap::new();
        for entry in &self.heuristic {
            let map = match entry.goal {
                None => &mut any_goal,
                Some(g) if g == goal => &mut this_goal,
                Some(_) => continue,
            };
            if map.insert(entry.node, entry.estimate).is_some() {
                bail_invalid!(
                    "heuristic",
                    format!("duplicate estimate for node {}", entry.node)
                );
            }
        }
        any_goal.extend(this_goal);
        Ok(any_goal)
    }
}

impl Graph {
    /// Serializable form of this graph. Undirected edges are written once.
    pub fn to_document(&self) -> GraphDocument {
        let nodes = self
            .node_ids()
            .into_iter()
            .map(|id| NodeEntry {
                id,
                attrs: self.node(id).cloned().unwrap_or_default(),
            })
            .collect();

        let edges = self
            .edges()
            .into_iter()
            .map(|(from, edge)| EdgeEntry {
                from,
                to: edge.to,
                weight: edge.weight,
                attrs: edge.attrs.clone(),
            })
            .collect();

        GraphDocument {
            directed: self.is_directed(),
            nodes,
            edges,
            heuristic: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphoError;
    use tempfile::tempdir;

    const ROADS: &str = r#"
directed = false

[[nodes]]
id = 1
attrs = { name = "depot" }

[[edges]]
from = 1
to = 2
weight = 4

[[edges]]
from = 2
to = 3

[[heuristic]]
node = 2
estimate = 3
"#;

    #[test]
    fn test_from_toml() {
        let doc = GraphDocument::from_toml(ROADS).unwrap();
        assert!(!doc.directed);
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.edges[1].weight, 1);
        assert_eq!(
            doc.heuristic,
            vec![HeuristicEntry {
                node: 2,
                goal: None,
                estimate: 3
            }]
        );

        let graph = doc.into_graph();
        assert_eq!(graph.node_ids(), vec![1, 2, 3]);
        assert_eq!(graph.edge(2, 1).map(|e| e.weight), Some(4));
        assert_eq!(
            graph.node(1).and_then(|a| a.get("name")),
            Some(&serde_json::json!("depot"))
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = GraphDocument::from_toml("").unwrap();
        assert!(doc.to_graph().is_empty());
    }

    #[test]
    fn test_missing_edge_endpoint_field() {
        let err = GraphDocument::from_toml("[[edges]]\nfrom = 1\n").unwrap_err();
        assert!(matches!(err, GraphoError::Toml(_)));
    }

    #[test]
    fn test_heuristic_map_rejects_duplicates() {
        let mut doc = GraphDocument::default();
        doc.heuristic.push(HeuristicEntry {
            node: 4,
            goal: None,
            estimate: 1,
        });
        assert_eq!(doc.heuristic_map(9).unwrap().get(&4), Some(&1));

        doc.heuristic.push(HeuristicEntry {
            node: 4,
            goal: None,
            estimate: 2,
        });
        assert!(matches!(
            doc.heuristic_map(9),
            Err(GraphoError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_heuristic_map_filters_by_goal() {
        let doc = GraphDocument::from_toml(
            r#"
[[heuristic]]
node = 1
estimate = 1

[[heuristic]]
node = 2
goal = 3
estimate = 10

[[heuristic]]
node = 1
goal = 3
estimate = 2
"#,
        )
        .unwrap();

        let toward_3 = doc.heuristic_map(3).unwrap();
        assert_eq!(toward_3.get(&1), Some(&2));
        assert_eq!(toward_3.get(&2), Some(&10));

        let toward_4 = doc.heuristic_map(4).unwrap();
        assert_eq!(toward_4.get(&1), Some(&1));
        assert_eq!(toward_4.get(&2), None);
    }

    #[test]
    fn test_to_document_writes_undirected_edges_once() {
        let mut graph = Graph::undirected();
        graph.add_edge(2, 1, 5, Attrs::new().with("lane", 2));
        graph.add_node(3, Attrs::default());

        let doc = graph.to_document();
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!((doc.edges[0].from, doc.edges[0].to), (1, 2));
        assert_eq!(doc.to_graph(), graph);
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let dir = tempdir().unwrap();
        let doc = GraphDocument::from_toml(ROADS).unwrap();

        for name in ["graph.toml", "graph.json"] {
            let path = dir.path().join(name);
            doc.save(&path).unwrap();
            let loaded = GraphDocument::load(&path).unwrap();
            assert_eq!(loaded.to_graph(), doc.to_graph(), "{}", name);
            assert_eq!(loaded.heuristic, doc.heuristic);
        }

        let json = std::fs::read_to_string(dir.path().join("graph.json")).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = GraphDocument::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphoError::Io(_)));
    }
}
