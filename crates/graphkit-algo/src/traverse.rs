//! Breadth-first reachability and small structural queries over a [`Graph`].

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{Graph, GraphBuilder, Node};
use std::collections::{HashSet, VecDeque};

/// Every node reachable from `start` by following successor edges, including
/// `start` itself, in breadth-first order.
pub fn reachable_nodes<'g, N: Node>(graph: &'g Graph<N>, start: &N) -> Result<Vec<&'g N>> {
    let start = graph.get_node(start).ok_or_else(|| {
        GraphError::invalid(format!("node {start:?} is not an element of this graph"))
    })?;

    let mut visited: HashSet<&N> = HashSet::new();
    let mut queue: VecDeque<&N> = VecDeque::new();
    let mut order = Vec::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for next in graph.successors(current)? {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(order)
}

/// The subgraph on `nodes` with every edge of `graph` between two of them.
/// Flags are copied from `graph`. Unknown nodes are rejected.
pub fn induced_subgraph<N: Node>(
    graph: &Graph<N>,
    nodes: impl IntoIterator<Item = N>,
) -> Result<Graph<N>> {
    let mut builder = GraphBuilder::from_graph(graph);
    for node in nodes {
        if !graph.contains_node(&node) {
            return Err(GraphError::invalid(format!(
                "node {node:?} is not an element of this graph"
            )));
        }
        builder.add_node(node);
    }
    for (source, target) in graph.edges() {
        if builder.contains_node(source) && builder.contains_node(target) {
            builder.add_edge(source, target)?;
        }
    }
    Ok(builder.build())
}

/// Nodes with no incoming edges, in graph order.
pub fn sources<N: Node>(graph: &Graph<N>) -> Vec<&N> {
    graph
        .nodes()
        .filter(|n| graph.in_degree(n).is_ok_and(|d| d == 0))
        .collect()
}

/// Nodes with no outgoing edges, in graph order.
pub fn sinks<N: Node>(graph: &Graph<N>) -> Vec<&N> {
    graph
        .nodes()
        .filter(|n| graph.out_degree(n).is_ok_and(|d| d == 0))
        .collect()
}
