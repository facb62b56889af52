//! Stack some pancakes, eat the top two, then find someone in an org chart.

use friend_graph::containers::{Stack, Tree, TreeNode};
use friend_graph::FgResult;

fn main() -> FgResult<()> {
    let cakes = ["chocolate", "peanutbutter", "chocolate", "blueberry"];
    let mut stack: Stack<&str> = cakes.into_iter().collect();
    println!("{}", stack);

    let [first, second] = stack.top_two()?;
    println!("Ate {} and {}; left: {}", first, second, stack);

    let chart = Tree::new(TreeNode::new(
        "Jane",
        vec![
            TreeNode::new("Jessica", vec![TreeNode::leaf("Janet")]),
            TreeNode::leaf("Jill"),
        ],
    ));
    match chart.find_in_tree(&"Janet") {
        Some(node) => println!("Found {} in {}", node, chart),
        None => println!("Janet is not in {}", chart),
    }
    Ok(())
}
