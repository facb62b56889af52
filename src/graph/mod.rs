//! In-memory friendship graph — the core data structure.

pub mod builder;
pub mod friend_graph;
pub mod sample;
pub mod traversal;

pub use builder::{GraphBuilder, GraphSpec};
pub use friend_graph::FriendGraph;
pub use traversal::{are_connected, bfs_order, bfs_visit};
