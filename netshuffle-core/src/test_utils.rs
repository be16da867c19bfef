//! Shared test utilities for `netshuffle-core`.

use netshuffle_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Graph, RawEdge};

/// Builds a standard proptest configuration from the shared profile.
///
/// Keeps property suites aligned on the same `NETSHUFFLE_PBT_CASES` and
/// `NETSHUFFLE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(source, target)` label pairs.
pub(crate) fn graph_from_pairs(name: &str, pairs: &[(&str, &str)]) -> Graph {
    Graph::from_raw_edges(name, pairs.iter().map(|&(u, v)| RawEdge::new(u, v)))
}

/// Edge set of `graph` as sorted label pairs, for order-independent
/// comparisons.
pub(crate) fn sorted_label_pairs(graph: &Graph) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = graph
        .labelled_edges()
        .map(|(u, v)| {
            if u <= v {
                (u.to_owned(), v.to_owned())
            } else {
                (v.to_owned(), u.to_owned())
            }
        })
        .collect();
    pairs.sort();
    pairs
}
