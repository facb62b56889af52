//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::containers::{Stack, Tree};
use crate::graph::{sample, FriendGraph, GraphSpec};
use crate::types::{FgError, FgResult, PersonId};

/// Load the graph described by `path`, or the built-in sample when absent.
pub fn load_graph(path: Option<&Path>) -> FgResult<FriendGraph> {
    match path {
        Some(path) => GraphSpec::from_file(path)?.into_graph(),
        None => Ok(sample::hogwarts().0),
    }
}

/// Resolve a name to the first person carrying it.
pub fn resolve(graph: &FriendGraph, name: &str) -> FgResult<PersonId> {
    graph
        .find_by_name(name)
        .ok_or_else(|| FgError::UnknownPerson(name.to_string()))
}

/// Load a tree of strings from a JSON file.
pub fn load_tree(path: &Path) -> FgResult<Tree<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn display_name(graph: &FriendGraph, id: PersonId) -> &str {
    graph.name(id).unwrap_or("?")
}

/// Outcome of a connectivity query between two named people.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectedReport {
    pub a: String,
    pub b: String,
    pub connected: bool,
}

/// Answer whether the people named `a` and `b` are connected in `graph`.
pub fn connected_report(graph: &FriendGraph, a: &str, b: &str) -> FgResult<ConnectedReport> {
    let a_id = resolve(graph, a)?;
    let b_id = resolve(graph, b)?;
    Ok(ConnectedReport {
        a: a.to_string(),
        b: b.to_string(),
        connected: graph.are_connected(a_id, b_id),
    })
}

/// Report whether two people are connected.
pub fn cmd_connected(graph_path: Option<&Path>, a: &str, b: &str, json: bool) -> FgResult<()> {
    let graph = load_graph(graph_path)?;
    let report = connected_report(&graph, a, b)?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.connected {
        println!("{} and {} are connected", a, b);
    } else {
        println!("{} and {} are not connected", a, b);
    }
    Ok(())
}

/// List everyone reachable from a person, in breadth-first order.
pub fn cmd_reachable(graph_path: Option<&Path>, name: &str, json: bool) -> FgResult<()> {
    let graph = load_graph(graph_path)?;
    let start = resolve(&graph, name)?;
    let order = graph.reachable_from(start);

    if json {
        let people: Vec<serde_json::Value> = order
            .iter()
            .map(|&id| {
                serde_json::json!({
                    "id": id,
                    "name": display_name(&graph, id),
                    "member": graph.is_member(id),
                })
            })
            .collect();
        let report = serde_json::json!({"start": name, "reachable": people});
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Reachable from {} ({} people):", name, order.len());
        for id in order {
            let marker = if graph.is_member(id) {
                ""
            } else {
                " (not a member)"
            };
            println!("  {}{}", display_name(&graph, id), marker);
        }
    }
    Ok(())
}

/// Summarize a graph.
pub fn cmd_info(graph_path: Option<&Path>, json: bool) -> FgResult<()> {
    let graph = load_graph(graph_path)?;
    let members: Vec<&str> = graph
        .members()
        .into_iter()
        .map(|id| display_name(&graph, id))
        .collect();

    if json {
        let info = serde_json::json!({
            "members": members,
            "member_count": graph.member_count(),
            "person_count": graph.person_count(),
            "friendship_count": graph.friendship_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
        println!("Members: {}", graph.member_count());
        println!("People: {}", graph.person_count());
        println!("Friendships: {}", graph.friendship_count());
    }
    Ok(())
}

/// Look up a value in a JSON tree.
pub fn cmd_find(tree_path: &Path, value: &str, json: bool) -> FgResult<()> {
    let tree = load_tree(tree_path)?;
    let found = tree.find_in_tree(value);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "value": value,
                "found": found.is_some(),
                "children": found.map(|n| n.children.len()),
            })
        );
    } else {
        match found {
            Some(node) => println!(
                "Found {} with {} children",
                node,
                node.children.len()
            ),
            None => println!("{} not found in {}", value, tree),
        }
    }
    Ok(())
}

/// A stack built from command-line items, before and after popping.
#[derive(Debug, Clone, Serialize)]
pub struct StackReport {
    /// Display form of the stack as built.
    pub stack: String,
    /// The two popped items, top first, when requested.
    pub top_two: Option<[String; 2]>,
    /// Items left on the stack, bottom first.
    pub remaining: Stack<String>,
}

/// Build a stack from `items` (last item on top), optionally popping the top two.
pub fn stack_report(items: Vec<String>, top_two: bool) -> FgResult<StackReport> {
    let mut stack = Stack::from_vec(items);
    let description = stack.to_string();
    let popped = if top_two {
        Some(stack.top_two()?)
    } else {
        None
    };
    Ok(StackReport {
        stack: description,
        top_two: popped,
        remaining: stack,
    })
}

/// Build a stack from `items`, optionally popping the top two.
pub fn cmd_stack(items: Vec<String>, top_two: bool, json: bool) -> FgResult<()> {
    let report = stack_report(items, top_two)?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.stack);
        if let Some([first, second]) = &report.top_two {
            println!("Top two: {}, {}", first, second);
            println!("Remaining: {}", report.remaining);
        }
    }
    Ok(())
}

/// Process exit code for a failed command.
///
/// 1: I/O, 2: malformed input, 4: unknown person, 5: anything else.
pub fn exit_code(err: &FgError) -> i32 {
    match err {
        FgError::Io(_) => 1,
        FgError::Json(_) | FgError::InvalidArgument(_) => 2,
        FgError::UnknownPerson(_) | FgError::PersonNotFound(_) => 4,
        FgError::StackEmpty => 5,
    }
}
