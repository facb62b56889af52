//! Built-in sample graph.

use std::collections::HashMap;

use crate::types::PersonId;

use super::{FriendGraph, GraphBuilder};

const MEMBERS: [&str; 8] = [
    "Harry", "Hermione", "Ron", "Neville", "Fred", "Draco", "Crabbe", "Goyle",
];

const FRIENDSHIPS: [(&str, &str); 9] = [
    ("Harry", "Hermione"),
    ("Harry", "Ron"),
    ("Harry", "Neville"),
    ("Hermione", "Ron"),
    ("Neville", "Hermione"),
    ("Neville", "Trevor"),
    ("Ron", "Fred"),
    ("Draco", "Crabbe"),
    ("Draco", "Goyle"),
];

/// The Hogwarts friendship graph.
///
/// Two components: Harry's circle (plus Trevor, who is befriended but never
/// added as a member) and Draco's.
pub fn hogwarts() -> (FriendGraph, HashMap<String, PersonId>) {
    let mut builder = GraphBuilder::new();
    for name in MEMBERS {
        builder.person(name);
    }
    for (a, b) in FRIENDSHIPS {
        builder.friends(a, b);
    }
    builder.build_with_names()
}
