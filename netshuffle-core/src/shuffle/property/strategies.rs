//! Strategy builders for shuffler property tests.
//!
//! Generates small random graphs from seeded edge draws. Node counts stay low
//! enough that dense graphs, stars and near-complete graphs all turn up.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, RawEdge};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 40;

/// A generated graph together with shuffle parameters.
#[derive(Clone, Debug)]
pub(super) struct ShuffleFixture {
    pub(super) graph: Graph,
    pub(super) multiplier: f64,
    pub(super) seed: u64,
}

/// Generates fixtures with random topology, multiplier in `[0, 3)` and seed.
pub(super) fn shuffle_fixture_strategy() -> impl Strategy<Value = ShuffleFixture> {
    (any::<u64>(), 0.0_f64..3.0, any::<u64>()).prop_map(|(graph_seed, multiplier, seed)| {
        let mut rng = SmallRng::seed_from_u64(graph_seed);
        ShuffleFixture {
            graph: random_graph(&mut rng),
            multiplier,
            seed,
        }
    })
}

/// Draws a random edge list, including self-loops and duplicates that the
/// builder must discard.
pub(super) fn random_graph(rng: &mut SmallRng) -> Graph {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let max_edges = node_count.saturating_mul(node_count - 1) / 2 + 4;
    let edge_draws = rng.gen_range(0..=max_edges);
    let edges: Vec<RawEdge> = (0..edge_draws)
        .map(|_| {
            let u = rng.gen_range(0..node_count);
            let v = rng.gen_range(0..node_count);
            RawEdge::new(format!("n{u}"), format!("n{v}"))
        })
        .collect();
    Graph::from_raw_edges("generated", edges)
}
