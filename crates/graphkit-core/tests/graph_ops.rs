use graphkit_core::error::GraphError;
use graphkit_core::graph::*;
use std::collections::HashSet;

fn make_graph(options: GraphOptions, edges: &[(&str, &str)]) -> Graph<String> {
    let mut builder = options.builder();
    for (s, t) in edges {
        builder.put_edge((*s).to_string(), (*t).to_string()).unwrap();
    }
    builder.build()
}

#[test]
fn test_graph_owns_its_nodes() {
    let mut names = vec!["a".to_string(), "b".to_string()];
    let mut builder = GraphOptions::directed().builder();
    builder.put_edge(names[0].clone(), names[1].clone()).unwrap();
    let graph = builder.build();

    names[0].push_str("-changed");
    names.clear();
    assert!(graph.contains_node(&"a".to_string()));
    assert!(graph.has_edge(&"a".to_string(), &"b".to_string()));
}

#[test]
fn test_every_edge_endpoint_is_a_node() {
    let graph = make_graph(
        GraphOptions::directed(),
        &[("a", "b"), ("b", "c"), ("d", "a")],
    );
    let nodes: HashSet<&String> = graph.nodes().collect();
    for (s, t) in graph.edges() {
        assert!(nodes.contains(s) && nodes.contains(t));
    }
}

#[test]
fn test_degrees_count_distinct_edges() {
    let graph = make_graph(
        GraphOptions::directed(),
        &[("a", "c"), ("b", "c"), ("a", "c"), ("c", "d")],
    );
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.in_degree(&"c".to_string()).unwrap(), 2);
    assert_eq!(graph.out_degree(&"c".to_string()).unwrap(), 1);
    assert_eq!(graph.out_degree(&"a".to_string()).unwrap(), 1);
}

#[test]
fn test_undirected_degree_counts_neighbours() {
    let graph = make_graph(GraphOptions::undirected(), &[("a", "b"), ("c", "a")]);
    assert_eq!(graph.in_degree(&"a".to_string()).unwrap(), 2);
    assert_eq!(graph.out_degree(&"a".to_string()).unwrap(), 2);
    assert!(graph.has_edge(&"b".to_string(), &"a".to_string()));
}

#[test]
fn test_disallowed_self_loop_error() {
    let mut builder = GraphOptions::undirected().builder();
    let err = builder.put_edge(1, 1).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument(ref m) if m.contains("self-loop")));
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let graph = make_graph(GraphOptions::directed(), &[("a", "b"), ("b", "c")]);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| graph.edges().count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    });
}

#[test]
fn test_graph_equality_respects_flags() {
    let directed = make_graph(GraphOptions::directed(), &[("a", "b")]);
    let undirected = make_graph(GraphOptions::undirected(), &[("a", "b")]);
    assert_ne!(directed, undirected);
    assert_eq!(directed.clone(), directed);
}
