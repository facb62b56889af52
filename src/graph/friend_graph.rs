//! Core graph structure — a person arena plus a membership set.

use std::collections::HashSet;
use std::fmt;

use crate::types::{FgError, FgResult, Person, PersonId};

use super::traversal;

/// People and their friendships.
///
/// Every person lives in an arena owned by the graph and is addressed by a
/// [`PersonId`]. Membership is tracked separately: a person can exist, and be
/// befriended, without ever being added as a member.
#[derive(Debug, Clone, Default)]
pub struct FriendGraph {
    /// Arena of all people, indexed by `PersonId`.
    people: Vec<Person>,
    /// Handles explicitly added to the graph.
    members: HashSet<PersonId>,
}

impl FriendGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a person in the arena. The person is not a member until
    /// [`add_person`](Self::add_person) is called.
    pub fn new_person(&mut self, name: impl Into<String>) -> PersonId {
        let id = PersonId::from_index(self.people.len());
        self.people.push(Person::new(id, name));
        log::trace!("created person {}", id);
        id
    }

    /// Create a person who starts out friends with everyone in `friends`.
    ///
    /// The initial adjacency must be a set: a repeated handle is rejected with
    /// [`FgError::InvalidArgument`]. Nothing is created on error.
    pub fn new_person_with_friends<I>(
        &mut self,
        name: impl Into<String>,
        friends: I,
    ) -> FgResult<PersonId>
    where
        I: IntoIterator<Item = PersonId>,
    {
        let mut adjacent = HashSet::new();
        for friend in friends {
            if !adjacent.insert(friend) {
                return Err(FgError::InvalidArgument(format!(
                    "friend {} listed more than once",
                    friend
                )));
            }
            if self.person(friend).is_none() {
                return Err(FgError::PersonNotFound(friend));
            }
        }

        let id = self.new_person(name);
        for friend in adjacent {
            self.link(id, friend);
        }
        Ok(id)
    }

    /// Add a person to the membership set. Adding twice has no effect.
    pub fn add_person(&mut self, id: PersonId) {
        if self.members.insert(id) {
            log::trace!("added member {}", id);
        }
    }

    /// Add several people to the membership set.
    pub fn add_people<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = PersonId>,
    {
        for id in ids {
            self.add_person(id);
        }
    }

    /// Make `a` and `b` friends of each other.
    ///
    /// Membership is not checked; both handles only need to exist in the
    /// arena. Setting the same friendship twice has no further effect.
    pub fn set_friends(&mut self, a: PersonId, b: PersonId) -> FgResult<()> {
        for id in [a, b] {
            if self.person(id).is_none() {
                return Err(FgError::PersonNotFound(id));
            }
        }
        self.link(a, b);
        Ok(())
    }

    // Both handles must already be validated.
    fn link(&mut self, a: PersonId, b: PersonId) {
        self.people[a.index()].friends.insert(b);
        self.people[b.index()].friends.insert(a);
        log::trace!("linked {} <-> {}", a, b);
    }

    /// Is there a chain of friendships from `a` to `b`?
    ///
    /// Always true when `a == b`. Membership plays no part: the search
    /// follows friendships from `a` wherever they lead.
    pub fn are_connected(&self, a: PersonId, b: PersonId) -> bool {
        traversal::are_connected(self, a, b)
    }

    /// Everyone reachable from `start`, in breadth-first order.
    pub fn reachable_from(&self, start: PersonId) -> Vec<PersonId> {
        traversal::bfs_order(self, start)
    }

    /// Get a person by handle.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    /// Display name of a person.
    pub fn name(&self, id: PersonId) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }

    /// Direct friends of a person.
    pub fn friends(&self, id: PersonId) -> Option<&HashSet<PersonId>> {
        self.person(id).map(Person::friends)
    }

    /// Was this person added to the graph?
    pub fn is_member(&self, id: PersonId) -> bool {
        self.members.contains(&id)
    }

    /// All members, ordered by handle.
    pub fn members(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.members.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Every person in the arena, members or not.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// First person with the given name, in creation order.
    pub fn find_by_name(&self, name: &str) -> Option<PersonId> {
        self.people.iter().find(|p| p.name == name).map(|p| p.id)
    }

    /// Number of people in the arena.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of distinct friendships. A self-friendship counts once.
    pub fn friendship_count(&self) -> usize {
        let mut self_loops = 0;
        let mut ends = 0;
        for person in &self.people {
            for &friend in &person.friends {
                if friend == person.id {
                    self_loops += 1;
                } else {
                    ends += 1;
                }
            }
        }
        ends / 2 + self_loops
    }
}

impl fmt::Display for FriendGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .members()
            .into_iter()
            .filter_map(|id| self.name(id))
            .collect();
        write!(f, "<FriendGraph: {{{}}}>", names.join(", "))
    }
}
