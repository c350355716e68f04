//! Frontier expansion: grow a graph outward from a set of roots by following
//! caller-supplied successor and predecessor rules.

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{Graph, GraphOptions, Node};
use std::collections::{HashMap, HashSet, VecDeque};

/// Build the smallest graph closed under `successors` and `predecessors` that
/// contains every root.
///
/// Breadth-first: each reached node is expanded exactly once. Expanding `n`
/// adds the edge `n → s` for every `s` in `successors(n)` and `p → n` for every
/// `p` in `predecessors(n)`; unseen neighbours join the queue. The result is
/// directed and allows self-loops, so a node listed as its own neighbour keeps
/// that loop.
///
/// A callback returning `None` is a contract violation and fails with
/// [`GraphError::InvalidArgument`] naming the callback and the node being
/// expanded. No partial graph is returned.
pub fn reachability_graph<N, S, SI, P, PI>(
    roots: impl IntoIterator<Item = N>,
    mut successors: S,
    mut predecessors: P,
) -> Result<Graph<N>>
where
    N: Node,
    S: FnMut(&N) -> Option<SI>,
    SI: IntoIterator<Item = N>,
    P: FnMut(&N) -> Option<PI>,
    PI: IntoIterator<Item = N>,
{
    let mut builder = GraphOptions::directed().allow_self_loops(true).builder();
    let mut seen: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    for root in roots {
        if seen.insert(root.clone()) {
            queue.push_back(root);
        }
    }

    while let Some(current) = queue.pop_front() {
        builder.add_node(current.clone());

        let next = successors(&current).ok_or_else(|| {
            GraphError::invalid(format!(
                "successors callback returned no value for node {current:?}"
            ))
        })?;
        for successor in next {
            builder.put_edge(current.clone(), successor.clone())?;
            if seen.insert(successor.clone()) {
                queue.push_back(successor);
            }
        }

        let prev = predecessors(&current).ok_or_else(|| {
            GraphError::invalid(format!(
                "predecessors callback returned no value for node {current:?}"
            ))
        })?;
        for predecessor in prev {
            builder.put_edge(predecessor.clone(), current.clone())?;
            if seen.insert(predecessor.clone()) {
                queue.push_back(predecessor);
            }
        }

        tracing::trace!("expanded {:?}; {} node(s) queued", current, queue.len());
    }

    let graph = builder.build();
    tracing::debug!(
        "reachability graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// [`reachability_graph`] over adjacency maps. A node missing from a map has no
/// neighbours in that direction.
pub fn reachability_graph_from_maps<N: Node>(
    roots: impl IntoIterator<Item = N>,
    successors: &HashMap<N, Vec<N>>,
    predecessors: &HashMap<N, Vec<N>>,
) -> Result<Graph<N>> {
    reachability_graph(
        roots,
        |node| Some(successors.get(node).cloned().unwrap_or_default()),
        |node| Some(predecessors.get(node).cloned().unwrap_or_default()),
    )
}
