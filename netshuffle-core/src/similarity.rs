//! Edge similarity between an original graph and its shuffled copy.
//!
//! Edges are compared as unordered pairs. When both graphs share a node table
//! (the shuffler's output always does) the comparison runs on node
//! identifiers; otherwise it falls back to comparing labels, which lets a
//! graph reloaded from disk be compared with the one it was written from.

use std::collections::HashSet;

use crate::graph::Graph;

/// Number of original edges that survived a shuffle.
///
/// # Examples
/// ```
/// use netshuffle_core::EdgeSimilarity;
///
/// let similarity = EdgeSimilarity::new(3, 4);
/// assert_eq!(similarity.ratio(), 0.75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSimilarity {
    shared: usize,
    total: usize,
}

impl EdgeSimilarity {
    /// Creates a similarity record; `shared` is clamped to `total`.
    #[must_use]
    pub fn new(shared: usize, total: usize) -> Self {
        Self {
            shared: shared.min(total),
            total,
        }
    }

    /// Original edges also present in the shuffled graph.
    #[must_use]
    pub const fn shared(&self) -> usize {
        self.shared
    }

    /// Edges in the original graph.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Fraction of original edges retained, in `[0, 1]`. An empty original
    /// reports `0.0`; [`edge_similarity`] never builds such a record.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "edge counts stay far below 2^52"
    )]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.shared as f64 / self.total as f64
    }
}

/// Computes `|E_original ∩ E_shuffled| / |E_original|`.
///
/// Returns `None` when the original graph has no edges, because the ratio is
/// undefined.
///
/// # Examples
/// ```
/// use netshuffle_core::{Graph, RawEdge, edge_similarity};
///
/// let original = Graph::from_raw_edges("a", [RawEdge::new("x", "y"), RawEdge::new("y", "z")]);
/// let other = Graph::from_raw_edges("b", [RawEdge::new("z", "y"), RawEdge::new("x", "z")]);
/// let similarity = edge_similarity(&original, &other).expect("original has edges");
/// assert_eq!(similarity.shared(), 1);
/// assert_eq!(similarity.ratio(), 0.5);
///
/// let empty = Graph::from_raw_edges("empty", Vec::<RawEdge>::new());
/// assert!(edge_similarity(&empty, &original).is_none());
/// ```
#[must_use]
pub fn edge_similarity(original: &Graph, shuffled: &Graph) -> Option<EdgeSimilarity> {
    let total = original.edge_count();
    if total == 0 {
        return None;
    }
    let shared = if original.shares_nodes_with(shuffled) {
        original
            .edges()
            .iter()
            .filter(|edge| shuffled.contains_edge(**edge))
            .count()
    } else {
        let shuffled_pairs: HashSet<(&str, &str)> =
            shuffled.labelled_edges().map(unordered).collect();
        original
            .labelled_edges()
            .map(unordered)
            .filter(|pair| shuffled_pairs.contains(pair))
            .count()
    };
    Some(EdgeSimilarity::new(shared, total))
}

fn unordered<'a>((u, v): (&'a str, &'a str)) -> (&'a str, &'a str) {
    if u <= v { (u, v) } else { (v, u) }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::ShufflerBuilder;
    use crate::test_utils::graph_from_pairs as graph;

    #[rstest]
    #[case::identical(&[("a", "b"), ("c", "d")], &[("b", "a"), ("d", "c")], 2)]
    #[case::disjoint(&[("a", "b"), ("c", "d")], &[("a", "c"), ("b", "d")], 0)]
    #[case::partial(&[("a", "b"), ("c", "d")], &[("a", "b"), ("a", "d")], 1)]
    fn compares_independent_graphs_by_label(
        #[case] left: &[(&str, &str)],
        #[case] right: &[(&str, &str)],
        #[case] expected_shared: usize,
    ) {
        let original = graph("left", left);
        let other = graph("right", right);
        assert!(!original.shares_nodes_with(&other));
        let similarity = edge_similarity(&original, &other).expect("original has edges");
        assert_eq!(similarity.shared(), expected_shared);
        assert_eq!(similarity.total(), 2);
    }

    #[rstest]
    fn shuffled_copy_uses_shared_node_table() {
        let original = graph("square", &[("A", "B"), ("C", "D"), ("B", "C"), ("A", "D")]);
        let shuffler = ShufflerBuilder::new()
            .with_swap_multiplier(0.0)
            .build()
            .expect("zero multiplier is valid");
        let outcome = shuffler.shuffle(&original);
        assert!(original.shares_nodes_with(outcome.graph()));
        let similarity = edge_similarity(&original, outcome.graph()).expect("edges exist");
        assert_eq!(similarity.ratio(), 1.0);
    }

    #[rstest]
    #[case(0, 4, 0.0)]
    #[case(1, 4, 0.25)]
    #[case(4, 4, 1.0)]
    #[case(9, 4, 1.0)]
    fn ratio_stays_within_unit_interval(
        #[case] shared: usize,
        #[case] total: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(EdgeSimilarity::new(shared, total).ratio(), expected);
    }
}
