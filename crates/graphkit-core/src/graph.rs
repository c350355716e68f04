//! Graph data model: an owned, read-only `Graph<N>` and the `GraphBuilder<N>`
//! that produces it.

use crate::error::{GraphError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Anything usable as a vertex: equality and hash define set membership,
/// `Debug` lets errors name the offending node.
pub trait Node: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Node for T {}

/// Structural flags shared by a graph and the builder that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphOptions {
    pub directed: bool,
    pub allow_self_loops: bool,
}

impl GraphOptions {
    /// Directed graph, self-loops disallowed.
    pub fn directed() -> Self {
        Self {
            directed: true,
            allow_self_loops: false,
        }
    }

    /// Undirected graph, self-loops disallowed.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            allow_self_loops: false,
        }
    }

    pub fn allow_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    pub fn builder<N: Node>(self) -> GraphBuilder<N> {
        GraphBuilder::new(self)
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::directed()
    }
}

/// A simple graph (no parallel edges) over nodes of type `N`.
///
/// Nodes and edges iterate in insertion order. For undirected graphs `(a, b)`
/// and `(b, a)` denote the same edge: `has_edge` accepts either orientation and
/// `edges()` yields each edge once, oriented as first inserted.
///
/// A `Graph` has no mutating methods; build one with [`GraphBuilder`].
#[derive(Clone)]
pub struct Graph<N> {
    options: GraphOptions,
    /// Node values by id, in insertion order.
    nodes: Vec<N>,
    /// Reverse index: node value → id.
    index: HashMap<N, usize>,
    /// Outgoing neighbour ids per node (undirected: every neighbour).
    out_adj: Vec<Vec<usize>>,
    /// Incoming neighbour ids per node (undirected: every neighbour).
    in_adj: Vec<Vec<usize>>,
    /// Edges as id pairs, in insertion order.
    edges: Vec<(usize, usize)>,
    /// Edge membership keyed by `edge_key`.
    edge_set: HashSet<(usize, usize)>,
}

impl<N: Node> Graph<N> {
    fn empty(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            index: HashMap::new(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn allows_self_loops(&self) -> bool {
        self.options.allow_self_loops
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// The stored copy of `node`, if it is an element of this graph.
    pub fn get_node(&self, node: &N) -> Option<&N> {
        self.index.get_key_value(node).map(|(stored, _)| stored)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Edges as `(source, target)` in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .map(|&(s, t)| (&self.nodes[s], &self.nodes[t]))
    }

    pub fn has_edge(&self, source: &N, target: &N) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&s), Some(&t)) => self.edge_set.contains(&self.edge_key(s, t)),
            _ => false,
        }
    }

    /// Direct successors of `node` (undirected: all neighbours).
    pub fn successors<'a>(
        &'a self,
        node: &N,
    ) -> Result<impl ExactSizeIterator<Item = &'a N> + use<'a, N>> {
        let id = self.require(node)?;
        Ok(self.out_adj[id].iter().map(|&n| &self.nodes[n]))
    }

    /// Direct predecessors of `node` (undirected: all neighbours).
    pub fn predecessors<'a>(
        &'a self,
        node: &N,
    ) -> Result<impl ExactSizeIterator<Item = &'a N> + use<'a, N>> {
        let id = self.require(node)?;
        Ok(self.in_adj[id].iter().map(|&n| &self.nodes[n]))
    }

    /// Number of distinct edges ending at `node`.
    pub fn in_degree(&self, node: &N) -> Result<usize> {
        let id = self.require(node)?;
        Ok(self.in_adj[id].len())
    }

    /// Number of distinct edges starting at `node`.
    pub fn out_degree(&self, node: &N) -> Result<usize> {
        let id = self.require(node)?;
        Ok(self.out_adj[id].len())
    }

    /// A copy with every edge reversed. Undirected graphs are copied unchanged.
    pub fn transpose(&self) -> Self {
        if !self.is_directed() {
            return self.clone();
        }
        Self {
            options: self.options,
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            out_adj: self.in_adj.clone(),
            in_adj: self.out_adj.clone(),
            edges: self.edges.iter().map(|&(s, t)| (t, s)).collect(),
            edge_set: self.edge_set.iter().map(|&(s, t)| (t, s)).collect(),
        }
    }

    fn require(&self, node: &N) -> Result<usize> {
        self.index.get(node).copied().ok_or_else(|| {
            GraphError::invalid(format!("node {node:?} is not an element of this graph"))
        })
    }

    fn edge_key(&self, s: usize, t: usize) -> (usize, usize) {
        if self.is_directed() { (s, t) } else { (s.min(t), s.max(t)) }
    }

    fn insert_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        true
    }

    fn insert_edge(&mut self, s: usize, t: usize) -> Result<bool> {
        if s == t && !self.allows_self_loops() {
            return Err(GraphError::invalid(format!(
                "self-loop on {:?} is not allowed in this graph",
                self.nodes[s]
            )));
        }
        let key = self.edge_key(s, t);
        if !self.edge_set.insert(key) {
            return Ok(false);
        }
        self.edges.push((s, t));
        self.out_adj[s].push(t);
        self.in_adj[t].push(s);
        if !self.is_directed() && s != t {
            self.out_adj[t].push(s);
            self.in_adj[s].push(t);
        }
        Ok(true)
    }
}

/// Set semantics: same flags, same node set, same edge set.
impl<N: Node> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.options == other.options
            && self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.nodes().all(|n| other.contains_node(n))
            && self.edges().all(|(s, t)| other.has_edge(s, t))
    }
}

impl<N: Node> Eq for Graph<N> {}

impl<N: Node> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.is_directed())
            .field("allow_self_loops", &self.allows_self_loops())
            .field("nodes", &self.nodes)
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

/// Mutable staging area for a [`Graph`]. Consumed by [`GraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<N: Node> {
    graph: Graph<N>,
}

impl<N: Node> GraphBuilder<N> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            graph: Graph::empty(options),
        }
    }

    /// A builder with the same directedness and self-loop policy as `graph`.
    /// Nodes and edges are not copied.
    pub fn from_graph<M: Node>(graph: &Graph<M>) -> Self {
        Self::new(graph.options())
    }

    pub fn options(&self) -> GraphOptions {
        self.graph.options()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.graph.contains_node(node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the node was not already present.
    pub fn add_node(&mut self, node: N) -> bool {
        self.graph.insert_node(node)
    }

    /// Add an edge between two existing nodes. Returns `true` if the edge is new.
    ///
    /// Fails if either endpoint is not a node yet, or if the edge is a self-loop
    /// and the graph disallows them.
    pub fn add_edge(&mut self, source: &N, target: &N) -> Result<bool> {
        let s = self.graph.index.get(source).copied();
        let t = self.graph.index.get(target).copied();
        match (s, t) {
            (Some(s), Some(t)) => self.graph.insert_edge(s, t),
            (None, _) => Err(GraphError::invalid(format!(
                "edge source {source:?} is not an element of this graph"
            ))),
            (_, None) => Err(GraphError::invalid(format!(
                "edge target {target:?} is not an element of this graph"
            ))),
        }
    }

    /// Add an edge, inserting missing endpoints first. Returns `true` if the edge is new.
    pub fn put_edge(&mut self, source: N, target: N) -> Result<bool> {
        if source == target && !self.graph.allows_self_loops() {
            return Err(GraphError::invalid(format!(
                "self-loop on {source:?} is not allowed in this graph"
            )));
        }
        self.add_node(source.clone());
        self.add_node(target.clone());
        self.add_edge(&source, &target)
    }

    pub fn build(self) -> Graph<N> {
        self.graph
    }
}
