//! Non-reflexive transitive closure.
//!
//! The closure links `a` to `b` whenever a non-empty path `a → … → b` exists.
//! A node is linked to itself only when the input already carries that exact
//! self-loop as a direct edge; cycles through other nodes do not count.

use crate::traverse::reachable_nodes;
use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, GraphBuilder, Node};

/// Compute the non-reflexive transitive closure of `graph`.
///
/// The result has the same nodes and directedness as `graph` and allows
/// self-loops. For every node, the reflexive reachable set is expanded into
/// edges; the self-edge is then kept only if `graph` itself has it.
pub fn transitive_closure<N: Node>(graph: &Graph<N>) -> Result<Graph<N>> {
    let mut builder = GraphBuilder::new(graph.options().allow_self_loops(true));
    for node in graph.nodes() {
        builder.add_node(node.clone());
    }

    for node in graph.nodes() {
        // Checked against the input's direct edges, never the closure.
        let keep_self_loop = graph.has_edge(node, node);
        for reached in reachable_nodes(graph, node)? {
            if reached == node && !keep_self_loop {
                continue;
            }
            builder.add_edge(node, reached)?;
        }
    }

    let closure = builder.build();
    tracing::debug!(
        "transitive closure: {} nodes, {} -> {} edges",
        closure.node_count(),
        graph.edge_count(),
        closure.edge_count()
    );
    Ok(closure)
}
