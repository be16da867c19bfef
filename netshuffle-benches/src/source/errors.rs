use thiserror::Error;

/// Errors raised while generating synthetic graphs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticError {
    /// A simple graph with edges needs at least two nodes.
    #[error("synthetic graphs need at least two nodes (got {node_count})")]
    TooFewNodes {
        /// Requested node count.
        node_count: usize,
    },
    /// More edges were requested than there are node pairs.
    #[error("{requested} edges requested but only {max_edges} node pairs exist")]
    TooManyEdges {
        /// Requested edge count.
        requested: usize,
        /// Number of distinct node pairs.
        max_edges: usize,
    },
}
