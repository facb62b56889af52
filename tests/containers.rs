//! Tree and stack tests.

use friend_graph::containers::{Stack, Tree, TreeNode};
use friend_graph::types::FgError;
use serde::Deserialize;

fn org_chart() -> Tree<String> {
    let node = |s: &str, children: Vec<TreeNode<String>>| {
        TreeNode::new(s.to_string(), children)
    };
    let leaf = |s: &str| TreeNode::leaf(s.to_string());

    Tree::new(node(
        "Jane",
        vec![
            node("Jessica", vec![leaf("Janet"), leaf("Jen")]),
            node("Jill", vec![leaf("Jasmine")]),
        ],
    ))
}

// ==================== Tree Tests ====================

#[test]
fn test_find_root() {
    let tree = org_chart();
    let found = tree.find_in_tree("Jane").unwrap();
    assert_eq!(found.children.len(), 2);
}

#[test]
fn test_find_deep_node() {
    let tree = org_chart();
    let found = tree.find_in_tree("Jasmine").unwrap();
    assert_eq!(found.data, "Jasmine");
    assert!(found.children.is_empty());
}

#[test]
fn test_find_missing() {
    let tree = org_chart();
    assert!(tree.find_in_tree("Bob").is_none());
}

#[test]
fn test_find_from_subtree() {
    let tree = org_chart();
    let jessica = tree.find_in_tree("Jessica").unwrap();
    assert!(jessica.find("Jen").is_some());
    assert!(jessica.find("Jasmine").is_none());
}

#[test]
fn test_find_depth_first_order() {
    // Two nodes share a value; the last child's subtree is searched first.
    let deep_seven = TreeNode::new(7, vec![TreeNode::leaf(9)]);
    let tree = Tree::new(TreeNode::new(
        0,
        vec![
            TreeNode::new(1, vec![TreeNode::leaf(7)]),
            TreeNode::new(2, vec![deep_seven]),
        ],
    ));

    let found = tree.find_in_tree(&7).unwrap();
    assert_eq!(found.children.len(), 1);
}

#[test]
fn test_tree_building_helpers() {
    let mut root = TreeNode::leaf("a").with_child(TreeNode::leaf("b"));
    root.add_child(TreeNode::leaf("c"));
    assert_eq!(root.size(), 3);
    assert!(root.find(&"c").is_some());
}

#[test]
fn test_tree_display() {
    let tree = org_chart();
    assert_eq!(tree.to_string(), "<Tree root=<Node Jane>>");
    assert_eq!(tree.root.children[1].to_string(), "<Node Jill>");
}

#[test]
fn test_tree_from_json() {
    let json = r#"{
        "data": "root",
        "children": [{"data": "left"}, {"data": "right", "children": []}]
    }"#;
    let tree: Tree<String> = serde_json::from_str(json).unwrap();
    assert_eq!(tree.root.size(), 3);
    assert!(tree.find_in_tree("left").is_some());
}

/// Tree payload without a `Default` impl.
#[derive(Debug, PartialEq, Deserialize)]
struct Role {
    title: String,
}

#[test]
fn test_tree_from_json_payload_without_default() {
    let json = r#"{"data": {"title": "CEO"}, "children": [{"data": {"title": "CTO"}}]}"#;
    let tree: Tree<Role> = serde_json::from_str(json).unwrap();

    let cto = Role {
        title: "CTO".to_string(),
    };
    let found = tree.find_in_tree(&cto).unwrap();
    assert!(found.children.is_empty());
    assert_eq!(tree.root.size(), 2);
}

// ==================== Stack Tests ====================

#[test]
fn test_push_pop_lifo() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert!(stack.is_empty());
}

#[test]
fn test_pop_empty() {
    let mut stack: Stack<u8> = Stack::new();
    assert!(matches!(stack.pop(), Err(FgError::StackEmpty)));
}

#[test]
fn test_peek() {
    let mut stack = Stack::new();
    assert!(stack.peek().is_none());
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.peek(), Some(&"b"));
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_clear() {
    let mut stack = Stack::from_vec(vec![1, 2, 3]);
    stack.clear();
    assert!(stack.is_empty());
    assert!(stack.peek().is_none());
}

#[test]
fn test_top_two() {
    let mut stack: Stack<&str> = ["chocolate", "peanutbutter", "chocolate", "blueberry"]
        .into_iter()
        .collect();

    let [first, second] = stack.top_two().unwrap();
    assert_eq!(first, "blueberry");
    assert_eq!(second, "chocolate");
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&"peanutbutter"));
}

#[test]
fn test_top_two_too_short_leaves_stack_alone() {
    let mut stack = Stack::from_vec(vec![42]);
    let result = stack.top_two();
    assert!(matches!(result, Err(FgError::StackEmpty)));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&42));
}

#[test]
fn test_drain_pops_in_order() {
    let mut stack = Stack::from_vec(vec![1, 2, 3]);
    let drained: Vec<i32> = stack.drain().collect();
    assert_eq!(drained, vec![3, 2, 1]);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_display() {
    let mut stack = Stack::new();
    assert_eq!(stack.to_string(), "<Stack (empty)>");
    stack.push("waffle");
    stack.push("pancake");
    assert_eq!(stack.to_string(), "<Stack tail=pancake length=2>");
}
