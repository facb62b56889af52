//! Fluent API for building FriendGraph instances by name.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::types::{FgError, FgResult, PersonId};

use super::FriendGraph;

/// Fluent builder for constructing a FriendGraph from names.
///
/// Names are used only while building; each distinct name gets one person.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: FriendGraph,
    names: HashMap<String, PersonId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_create(&mut self, name: &str) -> PersonId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }
        let id = self.graph.new_person(name);
        self.names.insert(name.to_string(), id);
        id
    }

    /// Add a member. Returns the existing handle if the name was seen before.
    pub fn person(&mut self, name: &str) -> PersonId {
        let id = self.get_or_create(name);
        self.graph.add_person(id);
        id
    }

    /// Add a person who is never made a member.
    pub fn outsider(&mut self, name: &str) -> PersonId {
        self.get_or_create(name)
    }

    /// Make two people friends. Unknown names become non-members.
    pub fn friends(&mut self, a: &str, b: &str) -> &mut Self {
        let a = self.get_or_create(a);
        let b = self.get_or_create(b);
        // Both handles come from this builder's graph.
        if let Err(e) = self.graph.set_friends(a, b) {
            log::warn!("skipping friendship: {}", e);
        }
        self
    }

    /// Handle for a name added so far.
    pub fn id(&self, name: &str) -> Option<PersonId> {
        self.names.get(name).copied()
    }

    /// Build the final graph.
    pub fn build(self) -> FriendGraph {
        self.graph
    }

    /// Build the final graph, keeping the name lookup table.
    pub fn build_with_names(self) -> (FriendGraph, HashMap<String, PersonId>) {
        (self.graph, self.names)
    }
}

/// JSON description of a friendship graph.
///
/// ```json
/// { "people": ["Harry", "Ron"], "friendships": [["Harry", "Ron"], ["Ron", "Fred"]] }
/// ```
///
/// Names that only appear in `friendships` are created but not made members.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphSpec {
    /// Members of the graph.
    #[serde(default)]
    pub people: Vec<String>,
    /// Pairs of names to befriend.
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
}

impl GraphSpec {
    /// Parse a description from a JSON string.
    pub fn from_json(json: &str) -> FgResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a description from a JSON file.
    pub fn from_file(path: &Path) -> FgResult<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded graph description from {}", path.display());
        Self::from_json(&text)
    }

    /// Build the described graph.
    pub fn into_graph(self) -> FgResult<FriendGraph> {
        let mut seen = HashSet::new();
        for name in &self.people {
            if !seen.insert(name.as_str()) {
                return Err(FgError::InvalidArgument(format!(
                    "person {:?} listed more than once",
                    name
                )));
            }
        }

        let mut builder = GraphBuilder::new();
        for name in &self.people {
            builder.person(name);
        }
        for (a, b) in &self.friendships {
            builder.friends(a, b);
        }
        Ok(builder.build())
    }
}
