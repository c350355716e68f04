//! End-to-end checks of the builder → transform → order pipeline.

use graphkit_algo::*;
use graphkit_core::error::GraphError;
use graphkit_core::graph::{Graph, GraphOptions};
use std::collections::{HashMap, HashSet};

fn edge_set(graph: &Graph<char>) -> HashSet<(char, char)> {
    graph.edges().map(|(s, t)| (*s, *t)).collect()
}

fn node_set(graph: &Graph<char>) -> HashSet<char> {
    graph.nodes().copied().collect()
}

/// Brute force: is there a path of length >= 1 from `from` to `to`?
fn has_nonempty_path(graph: &Graph<char>, from: char, to: char) -> bool {
    let mut stack: Vec<char> = graph.successors(&from).unwrap().copied().collect();
    let mut seen = HashSet::new();
    while let Some(n) = stack.pop() {
        if n == to {
            return true;
        }
        if seen.insert(n) {
            stack.extend(graph.successors(&n).unwrap().copied());
        }
    }
    false
}

#[test]
fn test_sequence_path() {
    let graph = sequence_graph(['a', 'b', 'c']).unwrap();
    assert_eq!(node_set(&graph), HashSet::from(['a', 'b', 'c']));
    assert_eq!(edge_set(&graph), HashSet::from([('a', 'b'), ('b', 'c')]));
}

#[test]
fn test_sequence_repeats() {
    let graph = sequence_graph(['a', 'b', 'a', 'b']).unwrap();
    assert_eq!(node_set(&graph), HashSet::from(['a', 'b']));
    assert_eq!(edge_set(&graph), HashSet::from([('a', 'b'), ('b', 'a')]));
}

#[test]
fn test_closure_matches_path_existence() {
    let graph = sequence_graph("abcadeffg".chars()).unwrap();
    let closure = transitive_closure(&graph).unwrap();
    for x in graph.nodes() {
        for y in graph.nodes() {
            let expected = if x == y {
                graph.has_edge(x, x)
            } else {
                has_nonempty_path(&graph, *x, *y)
            };
            assert_eq!(closure.has_edge(x, y), expected, "edge ({x}, {y})");
        }
    }
    // 'a' lies on a cycle but has no direct self-loop; 'f' has one.
    assert!(!closure.has_edge(&'a', &'a'));
    assert!(closure.has_edge(&'f', &'f'));
}

#[test]
fn test_reachability_from_maps() {
    let successors = HashMap::from([('a', vec!['b'])]);
    let first = reachability_graph_from_maps(['a'], &successors, &HashMap::new()).unwrap();
    assert_eq!(node_set(&first), HashSet::from(['a', 'b']));
    assert_eq!(edge_set(&first), HashSet::from([('a', 'b')]));

    let predecessors = HashMap::from([('b', vec!['a'])]);
    let second = reachability_graph_from_maps(['a'], &successors, &predecessors).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_mapper_merge_and_injectivity() {
    let mut builder = GraphOptions::directed().builder();
    builder.put_edge('a', 'c').unwrap();
    builder.put_edge('b', 'd').unwrap();
    let graph = builder.build();

    let merge = HashMap::from([('a', 'a'), ('b', 'b'), ('c', 'e'), ('d', 'e')]);
    let mapped = map_graph_with(&graph, &merge).unwrap();
    assert_eq!(node_set(&mapped), HashSet::from(['a', 'b', 'e']));
    assert_eq!(edge_set(&mapped), HashSet::from([('a', 'e'), ('b', 'e')]));

    let collapse = HashMap::from([('a', 'x'), ('b', 'b'), ('c', 'x'), ('d', 'd')]);
    assert!(matches!(
        map_graph_with(&graph, &collapse),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_topological_sort_cycle_and_diamond() {
    let cyclic = sequence_graph(['a', 'b', 'a']).unwrap();
    assert!(matches!(
        topological_sort(&cyclic),
        Err(GraphError::Cycle { .. })
    ));

    let mut builder = GraphOptions::directed().builder();
    for (s, t) in [('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'd')] {
        builder.put_edge(s, t).unwrap();
    }
    let diamond = builder.build();
    let order = topological_sort(&diamond).unwrap();
    let pos = |n: char| order.iter().position(|&x| x == n).unwrap();
    assert!(pos('a') < pos('b') && pos('a') < pos('c'));
    assert!(pos('b') < pos('d') && pos('c') < pos('d'));
}

#[test]
fn test_topological_order_respects_every_edge() {
    let mut builder = GraphOptions::directed().builder();
    for (s, t) in [
        ('g', 'a'),
        ('e', 'f'),
        ('a', 'b'),
        ('f', 'b'),
        ('b', 'c'),
        ('e', 'c'),
        ('c', 'd'),
    ] {
        builder.put_edge(s, t).unwrap();
    }
    let graph = builder.build();
    let order = topological_sort(&graph).unwrap();
    assert_eq!(order.len(), graph.node_count());
    for (s, t) in graph.edges() {
        let ps = order.iter().position(|n| n == s).unwrap();
        let pt = order.iter().position(|n| n == t).unwrap();
        assert!(ps < pt, "{s} must precede {t} in {order:?}");
    }
}

#[test]
fn test_closure_of_dag_stays_acyclic() {
    let graph = sequence_graph("abcd".chars()).unwrap();
    let closure = transitive_closure(&graph).unwrap();
    assert_eq!(closure.edge_count(), 6);
    assert!(is_acyclic(&closure).unwrap());
    assert_eq!(topological_sort(&closure).unwrap(), vec!['a', 'b', 'c', 'd']);
}

#[test]
fn test_transpose_reverses_topological_constraints() {
    let graph = sequence_graph("xyz".chars()).unwrap();
    let reversed = graph.transpose();
    assert_eq!(topological_sort(&reversed).unwrap(), vec!['z', 'y', 'x']);
}
