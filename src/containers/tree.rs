//! Generic tree with depth-first lookup by value.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in a tree: a value plus its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    /// The value stored at this node.
    pub data: T,
    /// Child nodes, in order.
    #[serde(default = "Vec::new")]
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Create a node with children.
    pub fn new(data: T, children: Vec<TreeNode<T>>) -> Self {
        Self { data, children }
    }

    /// Create a node without children.
    pub fn leaf(data: T) -> Self {
        Self::new(data, Vec::new())
    }

    /// Append a child and return `self` for chaining.
    pub fn with_child(mut self, child: TreeNode<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn add_child(&mut self, child: TreeNode<T>) {
        self.children.push(child);
    }

    /// Find the first node holding `data`, searching depth-first.
    ///
    /// Uses an explicit stack: the most recently pushed node is checked next,
    /// so the last child of a node is explored before its siblings.
    pub fn find<Q>(&self, data: &Q) -> Option<&TreeNode<T>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut to_visit: Vec<&TreeNode<T>> = vec![self];

        while let Some(current) = to_visit.pop() {
            if current.data.borrow() == data {
                return Some(current);
            }
            to_visit.extend(current.children.iter());
        }
        None
    }

    /// Total number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Node {}>", self.data)
    }
}

/// A tree, held by its root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree<T> {
    /// Root node.
    pub root: TreeNode<T>,
}

impl<T> Tree<T> {
    /// Create a tree from its root.
    pub fn new(root: TreeNode<T>) -> Self {
        Self { root }
    }

    /// Find the first node holding `data`, starting at the root.
    pub fn find_in_tree<Q>(&self, data: &Q) -> Option<&TreeNode<T>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.root.find(data)
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Tree root={}>", self.root)
    }
}
