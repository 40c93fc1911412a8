//! Frontier containers used by the traversal engine
//!
//! - `PriorityQueue`: array-backed binary min-heap keyed by integer priority
//! - `OpenSet`: FIFO / LIFO / heap behind one push-pop-len contract

pub mod open_set;
pub mod pqueue;

pub use open_set::OpenSet;
pub use pqueue::PriorityQueue;
