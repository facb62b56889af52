//! friend-graph — a friendship graph with breadth-first connectivity queries.
//!
//! People live in an arena owned by [`FriendGraph`] and are addressed by
//! [`PersonId`] handles. Friendships are symmetric. The crate also carries two
//! small containers: a [`Tree`] with depth-first lookup and a LIFO [`Stack`].

pub mod cli;
pub mod containers;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use containers::{Stack, Tree, TreeNode};
pub use graph::{FriendGraph, GraphBuilder, GraphSpec};
pub use types::{FgError, FgResult, Person, PersonId};
