//! Grapho Core Library
//!
//! Weighted graph storage, a single traversal engine for breadth-first,
//! depth-first, Dijkstra and A* search, and minimum spanning trees.

pub mod config;
pub mod container;
pub mod error;
pub mod graph;
pub mod logging;
