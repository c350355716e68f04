//! Path graphs from ordered sequences.

use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, GraphOptions, Node};

/// Build the directed, self-loop-allowing graph whose nodes are the distinct
/// items and whose edges join each item to the one after it.
///
/// Equal neighbours produce a self-loop; repeated pairs collapse into one edge.
pub fn sequence_graph<N: Node>(items: impl IntoIterator<Item = N>) -> Result<Graph<N>> {
    let mut builder = GraphOptions::directed().allow_self_loops(true).builder();
    let mut previous: Option<N> = None;
    for item in items {
        builder.add_node(item.clone());
        if let Some(prev) = previous.replace(item.clone()) {
            builder.add_edge(&prev, &item)?;
        }
    }
    let graph = builder.build();
    tracing::debug!(
        "sequence graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
