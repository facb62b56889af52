//! Person handles and the person node struct.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Stable handle to a person stored in a [`FriendGraph`](crate::graph::FriendGraph).
///
/// Identity is the handle, never the name: two people called "Ron" are two
/// different handles.
///
/// The handle is the person's arena position, stored at full `usize` width so
/// every position a `Vec` can hold maps to a distinct handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(usize);

impl PersonId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of this person in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person in the friendship graph.
#[derive(Debug, Clone)]
pub struct Person {
    /// Handle assigned by the owning graph.
    pub id: PersonId,
    /// Display label. Not unique.
    pub name: String,
    /// Handles of everyone this person is friends with.
    pub(crate) friends: HashSet<PersonId>,
}

impl Person {
    pub(crate) fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            friends: HashSet::new(),
        }
    }

    /// Everyone adjacent to this person.
    pub fn friends(&self) -> &HashSet<PersonId> {
        &self.friends
    }

    /// Number of friendships this person takes part in.
    pub fn degree(&self) -> usize {
        self.friends.len()
    }

    /// Whether `other` is a direct friend.
    pub fn is_friend(&self, other: PersonId) -> bool {
        self.friends.contains(&other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Node: {}>", self.name)
    }
}
