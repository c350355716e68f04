//! Graph construction and analysis over [`graphkit_core::graph::Graph`].
//!
//! Builders: [`reachability`] (frontier expansion from roots) and [`sequence`]
//! (path graphs). Transformations: [`closure`] (non-reflexive transitive
//! closure) and [`mapping`] (node relabelling). Consumers: [`topo`] (lazy
//! Kahn ordering) and [`traverse`] (BFS reachability, subgraphs, sources and sinks).
//!
//! Every entry point is a pure function of its inputs and allocates its own
//! working state per call.

pub mod closure;
pub mod mapping;
pub mod reachability;
pub mod sequence;
pub mod topo;
pub mod traverse;

pub use closure::transitive_closure;
pub use mapping::{map_graph, map_graph_with};
pub use reachability::{reachability_graph, reachability_graph_from_maps};
pub use sequence::sequence_graph;
pub use topo::{TopologicalOrder, is_acyclic, topological_sort};
