//! CLI entry point for the `fgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use friend_graph::cli::commands;

#[derive(Parser)]
#[command(
    name = "fgraph",
    about = "Friendship graph connectivity queries, plus tree and stack demos"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two people are connected
    Connected {
        /// First person's name
        a: String,
        /// Second person's name
        b: String,
        /// JSON graph description (defaults to the built-in sample)
        #[arg(long)]
        graph: Option<PathBuf>,
    },
    /// List everyone reachable from a person
    Reachable {
        /// Starting person's name
        name: String,
        /// JSON graph description (defaults to the built-in sample)
        #[arg(long)]
        graph: Option<PathBuf>,
    },
    /// Summarize a graph
    Info {
        /// JSON graph description (defaults to the built-in sample)
        #[arg(long)]
        graph: Option<PathBuf>,
    },
    /// Find a value in a JSON tree
    Find {
        /// Value to look for
        value: String,
        /// JSON tree file
        #[arg(long)]
        tree: PathBuf,
    },
    /// Build a stack from the given items (last item on top)
    Stack {
        /// Items to push, bottom first
        items: Vec<String>,
        /// Pop the top two items
        #[arg(long)]
        top_two: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Connected { a, b, graph } => {
            commands::cmd_connected(graph.as_deref(), &a, &b, json)
        }
        Commands::Reachable { name, graph } => {
            commands::cmd_reachable(graph.as_deref(), &name, json)
        }
        Commands::Info { graph } => commands::cmd_info(graph.as_deref(), json),
        Commands::Find { value, tree } => commands::cmd_find(&tree, &value, json),
        Commands::Stack { items, top_two } => commands::cmd_stack(items, top_two, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(commands::exit_code(&e));
    }
}
