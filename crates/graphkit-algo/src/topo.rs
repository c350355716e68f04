//! Lazy topological ordering with cycle detection (Kahn's algorithm).

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{Graph, Node};
use std::collections::{HashMap, VecDeque};
use std::iter::FusedIterator;

/// Iterator over the nodes of a directed graph such that every edge's source
/// is yielded before its target.
///
/// Nodes with in-degree zero are queued in graph order and served FIFO. When
/// the queue runs dry while some nodes still have unresolved in-edges, the
/// iterator yields a single [`GraphError::Cycle`] and then ends. It cannot be
/// rewound; create a new one from the graph to start over.
pub struct TopologicalOrder<'g, N: Node> {
    graph: &'g Graph<N>,
    ready: VecDeque<&'g N>,
    /// Remaining in-degree of every node not yet ready.
    in_degrees: HashMap<&'g N, usize>,
    finished: bool,
}

impl<'g, N: Node> TopologicalOrder<'g, N> {
    /// Fails with [`GraphError::InvalidArgument`] for undirected graphs.
    pub fn new(graph: &'g Graph<N>) -> Result<Self> {
        if !graph.is_directed() {
            return Err(GraphError::invalid(
                "topological order requires a directed graph",
            ));
        }

        let mut ready = VecDeque::new();
        let mut in_degrees = HashMap::new();
        for node in graph.nodes() {
            match graph.in_degree(node)? {
                0 => ready.push_back(node),
                degree => {
                    in_degrees.insert(node, degree);
                }
            }
        }

        Ok(Self {
            graph,
            ready,
            in_degrees,
            finished: false,
        })
    }

    fn cycle_error(&self) -> GraphError {
        let nodes = self
            .graph
            .nodes()
            .filter(|n| self.in_degrees.contains_key(n))
            .map(|n| format!("{n:?}"))
            .collect();
        GraphError::Cycle { nodes }
    }
}

impl<'g, N: Node> Iterator for TopologicalOrder<'g, N> {
    type Item = Result<&'g N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let graph = self.graph;
        if let Some(node) = self.ready.pop_front() {
            let successors = match graph.successors(node) {
                Ok(successors) => successors,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            for successor in successors {
                if let Some(degree) = self.in_degrees.get_mut(successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        self.in_degrees.remove(successor);
                        self.ready.push_back(successor);
                    }
                }
            }
            return Some(Ok(node));
        }

        self.finished = true;
        if self.in_degrees.is_empty() {
            return None;
        }
        let err = self.cycle_error();
        tracing::debug!("topological order stopped: {}", err);
        Some(Err(err))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            // One extra slot for a trailing cycle error.
            let pending = self.ready.len() + self.in_degrees.len();
            (self.ready.len(), Some(pending + 1))
        }
    }
}

impl<N: Node> FusedIterator for TopologicalOrder<'_, N> {}

/// Collect a full topological order, or the cycle error.
pub fn topological_sort<N: Node>(graph: &Graph<N>) -> Result<Vec<N>> {
    TopologicalOrder::new(graph)?
        .map(|node| node.cloned())
        .collect()
}

/// `true` if the directed graph has no cycle (self-loops count as cycles).
pub fn is_acyclic<N: Node>(graph: &Graph<N>) -> Result<bool> {
    Ok(TopologicalOrder::new(graph)?.all(|node| node.is_ok()))
}
