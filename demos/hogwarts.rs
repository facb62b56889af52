//! Build the Hogwarts friendship graph and ask who knows whom.

use friend_graph::graph::sample;
use friend_graph::FgResult;

fn main() -> FgResult<()> {
    env_logger::init();

    let (graph, names) = sample::hogwarts();
    println!("{}", graph);

    let queries = [
        ("Harry", "Fred"),
        ("Harry", "Draco"),
        ("Draco", "Goyle"),
        ("Hermione", "Trevor"),
    ];
    for (a, b) in queries {
        let connected = graph.are_connected(names[a], names[b]);
        println!("  {} -> {}: {}", a, b, connected);
    }

    let order: Vec<&str> = graph
        .reachable_from(names["Neville"])
        .into_iter()
        .filter_map(|id| graph.name(id))
        .collect();
    println!("Reachable from Neville: {}", order.join(", "));
    Ok(())
}
