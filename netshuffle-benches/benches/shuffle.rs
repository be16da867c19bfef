//! Double-edge-swap shuffle benchmarks.
//!
//! Measures a full shuffle of seeded `G(n, m)` graphs at several sizes and
//! swap multipliers. Each iteration clones the input, so the clone is part
//! of the measured cost as it is for every real run.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use netshuffle_benches::{
    error::BenchSetupError,
    params::ShuffleBenchParams,
    source::{SyntheticGraph, SyntheticGraphConfig},
};
use netshuffle_core::ShufflerBuilder;

/// Seed used for graph generation and shuffling.
const SEED: u64 = 42;

/// Edge counts to benchmark; node counts are a quarter of these.
const EDGE_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

/// Swap multipliers to benchmark.
const MULTIPLIERS: &[f64] = &[0.5, 1.0];

fn shuffle_gnm_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("shuffle_gnm");
    group.sample_size(10);

    for &edge_count in EDGE_COUNTS {
        let synthetic = SyntheticGraph::generate(&SyntheticGraphConfig {
            node_count: edge_count >> 2,
            edge_count,
            seed: SEED,
        })?;
        group.throughput(Throughput::Elements(edge_count as u64));

        for &swap_multiplier in MULTIPLIERS {
            let shuffler = ShufflerBuilder::new()
                .with_swap_multiplier(swap_multiplier)
                .with_seed(SEED)
                .build()?;
            let params = ShuffleBenchParams {
                edge_count,
                swap_multiplier,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                synthetic.graph(),
                |b, graph| {
                    b.iter(|| shuffler.shuffle(graph));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn shuffle_gnm(c: &mut Criterion) {
    if let Err(err) = shuffle_gnm_impl(c) {
        panic!("shuffle_gnm benchmark setup failed: {err}");
    }
}

criterion_group!(benches, shuffle_gnm);
criterion_main!(benches);
