//! Seeded random graphs for benchmarks.
//!
//! Graphs are drawn uniformly from the simple graphs with a fixed node and
//! edge count (the `G(n, m)` model) by rejection sampling node pairs, so the
//! same configuration always yields the same graph.

mod errors;


use netshuffle_core::{Graph, GraphBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use errors::SyntheticError;

/// Configuration for a synthetic graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of nodes, labelled `"0"` to `"n - 1"`.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Seed for the pair sampler.
    pub seed: u64,
}

/// A generated graph together with the configuration it came from.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    config: SyntheticGraphConfig,
    graph: Graph,
}

impl SyntheticGraph {
    /// Generates a graph for `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError::TooFewNodes`] for fewer than two nodes and
    /// [`SyntheticError::TooManyEdges`] when `edge_count` exceeds the number
    /// of node pairs.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        let SyntheticGraphConfig {
            node_count,
            edge_count,
            seed,
        } = *config;
        if node_count < 2 {
            return Err(SyntheticError::TooFewNodes { node_count });
        }
        let max_edges = node_count.saturating_mul(node_count - 1) >> 1;
        if edge_count > max_edges {
            return Err(SyntheticError::TooManyEdges {
                requested: edge_count,
                max_edges,
            });
        }

        let labels: Vec<String> = (0..node_count).map(|index| index.to_string()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut builder = GraphBuilder::new(format!("gnm_{node_count}_{edge_count}"));
        let mut accepted = 0;
        while accepted < edge_count {
            let (Some(source), Some(target)) = (
                labels.get(rng.gen_range(0..node_count)),
                labels.get(rng.gen_range(0..node_count)),
            ) else {
                continue;
            };
            if builder.add_edge(source, target) {
                accepted += 1;
            }
        }
        let (graph, _) = builder.finish();
        Ok(Self {
            config: config.clone(),
            graph,
        })
    }

    /// Configuration the graph was generated from.
    #[must_use]
    pub fn config(&self) -> &SyntheticGraphConfig {
        &self.config
    }

    /// The generated graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the wrapper and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
