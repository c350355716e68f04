//! CLI binary for graphkit: build, transform, and order small graphs given as
//! edge lists on the command line.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphkit_algo::traverse::{sinks, sources};
use graphkit_core::config::GraphkitConfig;
use graphkit_core::graph::Graph;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "graphkit", about = "Directed-graph construction and analysis")]
struct Cli {
    /// Directory holding `.graphkit/config.toml` (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the path graph of an ordered sequence
    Sequence {
        /// Sequence elements, in order
        items: Vec<String>,
    },

    /// Expand roots forwards and backwards along an edge list
    Reach {
        /// Root node (repeatable)
        #[arg(short, long = "root", required = true)]
        roots: Vec<String>,

        /// Edge as <source><delimiter><target> (repeatable)
        #[arg(short, long = "edge")]
        edges: Vec<String>,
    },

    /// Print the non-reflexive transitive closure
    Closure {
        /// Edge as <source><delimiter><target> (repeatable)
        #[arg(short, long = "edge")]
        edges: Vec<String>,

        /// Isolated node (repeatable)
        #[arg(short, long = "node")]
        nodes: Vec<String>,
    },

    /// Relabel nodes; nodes without a mapping keep their name
    Map {
        /// Edge as <source><delimiter><target> (repeatable)
        #[arg(short, long = "edge")]
        edges: Vec<String>,

        /// Isolated node (repeatable)
        #[arg(short, long = "node")]
        nodes: Vec<String>,

        /// Mapping as <node><delimiter><image> (repeatable)
        #[arg(short, long = "map")]
        mappings: Vec<String>,
    },

    /// Print a topological order, or fail on a cycle
    Topo {
        /// Edge as <source><delimiter><target> (repeatable)
        #[arg(short, long = "edge")]
        edges: Vec<String>,

        /// Isolated node (repeatable)
        #[arg(short, long = "node")]
        nodes: Vec<String>,
    },

    /// Show node/edge counts, acyclicity, sources, and sinks
    Info {
        /// Edge as <source><delimiter><target> (repeatable)
        #[arg(short, long = "edge")]
        edges: Vec<String>,

        /// Isolated node (repeatable)
        #[arg(short, long = "node")]
        nodes: Vec<String>,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = load_config(&project_root)?;

    match cli.command {
        Commands::Sequence { items } => cmd_sequence(items),
        Commands::Reach { roots, edges } => cmd_reach(&config, roots, &edges),
        Commands::Closure { edges, nodes } => cmd_closure(&config, &nodes, &edges),
        Commands::Map {
            edges,
            nodes,
            mappings,
        } => cmd_map(&config, &nodes, &edges, &mappings),
        Commands::Topo { edges, nodes } => cmd_topo(&config, &nodes, &edges),
        Commands::Info { edges, nodes } => cmd_info(&config, &nodes, &edges),
    }
}

fn load_config(project_root: &Path) -> Result<GraphkitConfig> {
    let config = GraphkitConfig::load(project_root).with_context(|| {
        format!(
            "failed to load config from {}",
            graphkit_core::config::config_file(project_root).display()
        )
    })?;
    tracing::debug!(
        "config: directed={}, allow_self_loops={}",
        config.graph.directed,
        config.graph.allow_self_loops
    );
    Ok(config)
}

fn print_graph(graph: &Graph<String>) {
    let nodes: Vec<&str> = graph.nodes().map(String::as_str).collect();
    println!("nodes: {}", nodes.join(" "));
    for line in input::format_edges(graph) {
        println!("{line}");
    }
}

fn cmd_sequence(items: Vec<String>) -> Result<()> {
    let graph = graphkit_algo::sequence_graph(items)?;
    print_graph(&graph);
    Ok(())
}

fn cmd_reach(config: &GraphkitConfig, roots: Vec<String>, edges: &[String]) -> Result<()> {
    let edges = input::parse_edges(edges, config)?;
    let (successors, predecessors) = input::adjacency(&edges);
    let graph = graphkit_algo::reachability_graph_from_maps(roots, &successors, &predecessors)?;
    print_graph(&graph);
    Ok(())
}

fn cmd_closure(config: &GraphkitConfig, nodes: &[String], edges: &[String]) -> Result<()> {
    let graph = input::build_graph(nodes, edges, config)?;
    let closure = graphkit_algo::transitive_closure(&graph)?;
    print_graph(&closure);
    Ok(())
}

fn cmd_map(
    config: &GraphkitConfig,
    nodes: &[String],
    edges: &[String],
    mappings: &[String],
) -> Result<()> {
    let graph = input::build_graph(nodes, edges, config)?;
    let table = input::parse_mappings(mappings, config)?;
    for key in table.keys() {
        if !graph.contains_node(key) {
            tracing::warn!("mapping for {} ignored: not a node of the graph", key);
        }
    }
    let mapped = graphkit_algo::map_graph(&graph, |node| {
        Some(table.get(node).cloned().unwrap_or_else(|| node.clone()))
    })?;
    print_graph(&mapped);
    Ok(())
}

fn cmd_topo(config: &GraphkitConfig, nodes: &[String], edges: &[String]) -> Result<()> {
    let graph = input::build_graph(nodes, edges, config)?;
    for node in graphkit_algo::TopologicalOrder::new(&graph)? {
        let node = node.context("no topological order exists")?;
        println!("{node}");
    }
    Ok(())
}

fn cmd_info(config: &GraphkitConfig, nodes: &[String], edges: &[String]) -> Result<()> {
    let graph = input::build_graph(nodes, edges, config)?;

    println!(
        "Kind: {}",
        if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        }
    );
    println!("Self-loops allowed: {}", graph.allows_self_loops());
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
    if graph.is_directed() {
        println!("Acyclic: {}", graphkit_algo::is_acyclic(&graph)?);
        let join = |nodes: Vec<&String>| {
            nodes
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("Sources: {}", join(sources(&graph)));
        println!("Sinks: {}", join(sinks(&graph)));
    }
    Ok(())
}
