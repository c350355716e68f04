//! Error types shared by every graphkit component.

/// Errors raised by graph construction, transformation, and ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The caller broke an API contract: missing callback value, unknown node,
    /// dangling edge endpoint, or a forbidden self-loop.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Topological ordering ran out of zero in-degree nodes before visiting
    /// every node. `nodes` lists the nodes left on or behind a cycle.
    #[error("graph contains a cycle; {} node(s) could not be ordered: {}", .nodes.len(), .nodes.join(", "))]
    Cycle { nodes: Vec<String> },
}

impl GraphError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
