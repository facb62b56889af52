//! Graph traversal algorithms (BFS).

use std::collections::{HashSet, VecDeque};
use std::ops::ControlFlow;

use crate::types::PersonId;

use super::FriendGraph;

/// Breadth-first walk from `start`, calling `visit` on every dequeued person.
///
/// A person is marked seen when it is enqueued, so it enters the queue at
/// most once. The walk stops early when `visit` breaks.
pub fn bfs_visit<F>(graph: &FriendGraph, start: PersonId, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(PersonId) -> ControlFlow<()>,
{
    let mut queue: VecDeque<PersonId> = VecDeque::new();
    let mut seen: HashSet<PersonId> = HashSet::new();

    queue.push_back(start);
    seen.insert(start);

    while let Some(current) = queue.pop_front() {
        log::trace!("checking {}", current);
        visit(current)?;

        // Unknown handles have no friends to follow.
        let Some(friends) = graph.friends(current) else {
            continue;
        };
        for &friend in friends {
            if seen.insert(friend) {
                log::trace!("added to queue: {}", friend);
                queue.push_back(friend);
            }
        }
    }

    ControlFlow::Continue(())
}

/// Is `target` reachable from `start` by following friendships?
pub fn are_connected(graph: &FriendGraph, start: PersonId, target: PersonId) -> bool {
    let found = bfs_visit(graph, start, |person| {
        if person == target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_break();
    log::debug!("are_connected({}, {}) = {}", start, target, found);
    found
}

/// Every person reachable from `start` (including `start`), in visit order.
pub fn bfs_order(graph: &FriendGraph, start: PersonId) -> Vec<PersonId> {
    let mut order = Vec::new();
    let _ = bfs_visit(graph, start, |person| {
        order.push(person);
        ControlFlow::Continue(())
    });
    order
}
