//! Structure-preserving graph transformation under a node mapping.

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{Graph, GraphBuilder, Node};
use std::collections::HashMap;

/// Produce a new graph by sending every node `e` to `mapping(e)` and every
/// edge `(a, b)` to `(mapping(a), mapping(b))`.
///
/// The output keeps the input's directedness and self-loop policy. `mapping` is
/// called once per node and once per edge endpoint.
///
/// Fails with [`GraphError::InvalidArgument`] when:
/// - `mapping` returns `None` for a node;
/// - the graph disallows self-loops and an edge's endpoints map to the same
///   value (the mapping is not injective on that edge);
/// - an endpoint maps to a value no node mapped to.
///
/// When self-loops are allowed, a non-injective mapping merges nodes.
pub fn map_graph<E, F, M>(graph: &Graph<E>, mut mapping: M) -> Result<Graph<F>>
where
    E: Node,
    F: Node,
    M: FnMut(&E) -> Option<F>,
{
    let mut apply = |node: &E| {
        mapping(node).ok_or_else(|| {
            GraphError::invalid(format!("mapping has no value for node {node:?}"))
        })
    };

    let mut builder = GraphBuilder::from_graph(graph);
    for node in graph.nodes() {
        builder.add_node(apply(node)?);
    }

    for (source, target) in graph.edges() {
        let mapped_source = apply(source)?;
        let mapped_target = apply(target)?;
        if mapped_source == mapped_target && !graph.allows_self_loops() {
            return Err(GraphError::invalid(format!(
                "mapping is not injective: edge ({source:?}, {target:?}) collapses onto \
                 {mapped_source:?}, but the graph disallows self-loops"
            )));
        }
        builder.add_edge(&mapped_source, &mapped_target)?;
    }

    let mapped = builder.build();
    tracing::debug!(
        "mapped graph: {} -> {} nodes, {} -> {} edges",
        graph.node_count(),
        mapped.node_count(),
        graph.edge_count(),
        mapped.edge_count()
    );
    Ok(mapped)
}

/// [`map_graph`] with a lookup table. Nodes missing from `table` are rejected.
pub fn map_graph_with<E: Node, F: Node>(
    graph: &Graph<E>,
    table: &HashMap<E, F>,
) -> Result<Graph<F>> {
    map_graph(graph, |node| table.get(node).cloned())
}
