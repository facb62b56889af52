//! Small container types: a searchable tree and a LIFO stack.

pub mod stack;
pub mod tree;

pub use stack::{Drain, Stack};
pub use tree::{Tree, TreeNode};
