//! Weighted graphs and the algorithms that run over them
//!
//! - `store`: the in-memory adjacency-list graph
//! - `traversal`: the read-only provider trait the algorithms consume
//! - `algos`: searches (BFS, DFS, Dijkstra, A*) and spanning trees
//! - `document`: the TOML/JSON file format

pub mod algos;
pub mod attrs;
pub mod document;
pub mod path;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    astar, breadth_first_search, depth_first_search, dijkstra, explore, is_connected,
    kruskal_mst, minimum_spanning_tree, minimum_spanning_tree_with, prim_mst, search, search_with,
    CancelToken, MstOptions, SearchOptions, TraversalStats,
};
pub use attrs::Attrs;
pub use document::GraphDocument;
pub use path::{path_cost, ClosedSet};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{
    null_heuristic, Edge, Heuristic, MstAlgorithm, NodeId, SearchAlgorithm, Weight,
    MST_ALGORITHMS, SEARCH_ALGORITHMS,
};
