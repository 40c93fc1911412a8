//! Graph algorithm implementations
//!
//! - `search`: one expansion loop driving BFS, DFS, Dijkstra and A*
//! - `mst`: minimum spanning trees (Prim, Kruskal) and connectivity
//! - `shared`: cancellation and per-run statistics

pub mod mst;
pub mod search;
pub mod shared;

pub use mst::{
    is_connected, kruskal_mst, minimum_spanning_tree, minimum_spanning_tree_with, prim_mst,
    MstOptions,
};
pub use search::{
    astar, breadth_first_search, depth_first_search, dijkstra, explore, explore_with, search,
    search_with, SearchOptions,
};
pub use shared::{CancelToken, TraversalStats};
