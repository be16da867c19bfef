//! Benchmark parameter types.

use std::fmt;

/// Parameters for a shuffle benchmark run.
#[derive(Clone, Debug)]
pub struct ShuffleBenchParams {
    /// Edges in the synthetic graph.
    pub edge_count: usize,
    /// Successful swaps requested per edge.
    pub swap_multiplier: f64,
}

impl fmt::Display for ShuffleBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={},K={}", self.edge_count, self.swap_multiplier)
    }
}

/// Parameters for a similarity benchmark run.
#[derive(Clone, Debug)]
pub struct SimilarityBenchParams {
    /// Edges in the synthetic graph.
    pub edge_count: usize,
    /// Whether the compared graphs share a node table.
    pub shared_nodes: bool,
}

impl fmt::Display for SimilarityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.shared_nodes { "ids" } else { "labels" };
        write!(f, "m={},{mode}", self.edge_count)
    }
}
