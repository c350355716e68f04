//! Turning command-line arguments into graphs.

use anyhow::{Context, Result};
use graphkit_core::config::GraphkitConfig;
use graphkit_core::graph::Graph;
use std::collections::HashMap;

/// Node → neighbours, as consumed by the reachability builder.
pub type Adjacency = HashMap<String, Vec<String>>;

/// Split `arg` on the first `delimiter` into two non-empty halves.
fn split_pair(arg: &str, delimiter: &str, what: &str) -> Result<(String, String)> {
    let Some((left, right)) = arg.split_once(delimiter) else {
        anyhow::bail!("invalid {what} {arg:?}: expected <left>{delimiter}<right>");
    };
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        anyhow::bail!("invalid {what} {arg:?}: both sides of {delimiter:?} must be non-empty");
    }
    Ok((left.to_string(), right.to_string()))
}

pub fn parse_edges(args: &[String], config: &GraphkitConfig) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| split_pair(arg, &config.input.edge_delimiter, "edge"))
        .collect()
}

pub fn parse_mappings(
    args: &[String],
    config: &GraphkitConfig,
) -> Result<HashMap<String, String>> {
    args.iter()
        .map(|arg| split_pair(arg, &config.input.mapping_delimiter, "mapping"))
        .collect()
}

/// Build a graph from `--node` and `--edge` arguments using the configured flags.
pub fn build_graph(
    nodes: &[String],
    edges: &[String],
    config: &GraphkitConfig,
) -> Result<Graph<String>> {
    let mut builder = config.graph.options().builder();
    for node in nodes {
        builder.add_node(node.clone());
    }
    for (source, target) in parse_edges(edges, config)? {
        builder
            .put_edge(source, target)
            .context("failed to add edge from command line")?;
    }
    Ok(builder.build())
}

/// Forward and reverse adjacency maps for an edge list.
pub fn adjacency(edges: &[(String, String)]) -> (Adjacency, Adjacency) {
    let mut successors = Adjacency::new();
    let mut predecessors = Adjacency::new();
    for (source, target) in edges {
        successors
            .entry(source.clone())
            .or_default()
            .push(target.clone());
        predecessors
            .entry(target.clone())
            .or_default()
            .push(source.clone());
    }
    (successors, predecessors)
}

/// One line per edge: `a -> b` for directed graphs, `a -- b` otherwise.
pub fn format_edges(graph: &Graph<String>) -> Vec<String> {
    let arrow = if graph.is_directed() { "->" } else { "--" };
    graph
        .edges()
        .map(|(source, target)| format!("{source} {arrow} {target}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_edges_default_delimiter() {
        let config = GraphkitConfig::default();
        let edges = parse_edges(&args(&["a:b", " c : d "]), &config).unwrap();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_edges_custom_delimiter() {
        let mut config = GraphkitConfig::default();
        config.input.edge_delimiter = "->".to_string();
        let edges = parse_edges(&args(&["x->y"]), &config).unwrap();
        assert_eq!(edges, vec![("x".to_string(), "y".to_string())]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let config = GraphkitConfig::default();
        assert!(parse_edges(&args(&["ab"]), &config).is_err());
        assert!(parse_edges(&args(&[":b"]), &config).is_err());
        assert!(parse_mappings(&args(&["a:x"]), &config).is_err());
    }

    #[test]
    fn test_build_graph_respects_flags() {
        let mut config = GraphkitConfig::default();
        config.graph.allow_self_loops = false;
        assert!(build_graph(&[], &args(&["a:a"]), &config).is_err());

        config.graph.directed = false;
        let graph = build_graph(&args(&["z"]), &args(&["a:b", "b:a"]), &config).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(format_edges(&graph), vec!["a -- b".to_string()]);
    }

    #[test]
    fn test_adjacency_maps() {
        let edges = vec![
            ("a".to_string(), "b".to_string()),
            ("a".to_string(), "c".to_string()),
        ];
        let (succ, pred) = adjacency(&edges);
        assert_eq!(succ["a"], vec!["b".to_string(), "c".to_string()]);
        assert_eq!(pred["c"], vec!["a".to_string()]);
        assert!(!succ.contains_key("b"));
    }
}
