//! Degree-preserving randomisation by repeated double edge swaps.
//!
//! The [`Shuffler`] clones its input and rewires the copy, so the original
//! graph stays available for similarity reporting. The number of successful
//! swaps requested is `ceil(multiplier * |E|)`, and the number of attempts is
//! capped at `requested * max_attempts_per_swap`. Hitting the cap is not an
//! error: the partially shuffled graph is returned with
//! [`ShuffleStatus::AttemptLimitReached`].

mod builder;
mod swap;

#[cfg(test)]
mod property;

use std::{fmt, num::NonZeroUsize};

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::graph::Graph;

pub use builder::{
    DEFAULT_MAX_ATTEMPTS_PER_SWAP, DEFAULT_SWAP_MULTIPLIER, MAX_SWAP_MULTIPLIER, ShufflerBuilder,
};
use swap::{Attempt, attempt_swap, has_valid_swap};

/// Relative slack used when rounding the swap target, so that products such
/// as `0.7 * 10` request 7 swaps rather than 8.
const TARGET_ROUNDING_TOLERANCE: f64 = 1e-9;

/// Graphs with at most this many edges are checked pair by pair for a valid
/// swap before shuffling.
const EXACT_SWAP_SCAN_EDGE_LIMIT: usize = 512;

/// How a shuffle run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShuffleStatus {
    /// Every requested swap was performed.
    Completed,
    /// The attempt budget ran out first; the graph is partially shuffled.
    AttemptLimitReached,
    /// The graph admits no valid swap (fewer than four nodes, fewer than two
    /// edges, complete, a star, or a small graph whose every edge pair fails
    /// to rewire), so it was returned unchanged.
    NoValidSwaps,
}

impl ShuffleStatus {
    /// Stable lowercase label used in logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::AttemptLimitReached => "attempt_limit_reached",
            Self::NoValidSwaps => "no_valid_swaps",
        }
    }
}

impl fmt::Display for ShuffleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of rejected swap attempts by reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    /// Both draws picked the same edge.
    pub same_edge: usize,
    /// The two edges shared an endpoint.
    pub shared_endpoint: usize,
    /// A rewired edge already existed.
    pub would_duplicate: usize,
}

impl RejectionCounts {
    /// Total number of rejected attempts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.same_edge + self.shared_endpoint + self.would_duplicate
    }
}

/// Diagnostics describing a shuffle run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShuffleReport {
    /// Successful swaps requested, `ceil(multiplier * |E|)`.
    pub requested_swaps: usize,
    /// Successful swaps performed.
    pub performed_swaps: usize,
    /// Attempts made, successful or not.
    pub attempts: usize,
    /// Attempt budget for the run.
    pub max_attempts: usize,
    /// Seed the random generator was initialised with.
    pub seed: u64,
    /// Rejected attempts by reason.
    pub rejections: RejectionCounts,
    /// How the run ended.
    pub status: ShuffleStatus,
}

/// Shuffled graph together with the run diagnostics.
#[derive(Clone, Debug)]
pub struct ShuffleOutcome {
    graph: Graph,
    report: ShuffleReport,
}

impl ShuffleOutcome {
    /// The shuffled graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Diagnostics for the run.
    #[must_use]
    pub fn report(&self) -> &ShuffleReport {
        &self.report
    }

    /// Splits the outcome into the shuffled graph and its report.
    #[must_use]
    pub fn into_parts(self) -> (Graph, ShuffleReport) {
        (self.graph, self.report)
    }
}

/// Degree-preserving edge shuffler.
///
/// # Examples
/// ```
/// use netshuffle_core::{Graph, RawEdge, ShuffleStatus, ShufflerBuilder};
///
/// let graph = Graph::from_raw_edges(
///     "ring",
///     (0..12).map(|i| RawEdge::new(i.to_string(), ((i + 1) % 12).to_string())),
/// );
/// let shuffler = ShufflerBuilder::new().with_seed(42).build()?;
/// let outcome = shuffler.shuffle(&graph);
///
/// assert_eq!(outcome.graph().degrees(), graph.degrees());
/// assert_eq!(outcome.report().seed, 42);
/// assert_eq!(outcome.report().status, ShuffleStatus::Completed);
/// # Ok::<(), netshuffle_core::ShuffleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    swap_multiplier: f64,
    max_attempts_per_swap: NonZeroUsize,
    seed: Option<u64>,
}

impl Shuffler {
    pub(crate) fn new(
        swap_multiplier: f64,
        max_attempts_per_swap: NonZeroUsize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            swap_multiplier,
            max_attempts_per_swap,
            seed,
        }
    }

    /// Successful swaps requested per edge.
    #[must_use]
    pub fn swap_multiplier(&self) -> f64 {
        self.swap_multiplier
    }

    /// Attempts allowed per requested swap.
    #[must_use]
    pub fn max_attempts_per_swap(&self) -> NonZeroUsize {
        self.max_attempts_per_swap
    }

    /// Fixed seed, if one was configured.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of successful swaps requested for a graph with `edges` edges.
    ///
    /// # Examples
    /// ```
    /// use netshuffle_core::ShufflerBuilder;
    ///
    /// let shuffler = ShufflerBuilder::new().with_swap_multiplier(0.7).build()?;
    /// assert_eq!(shuffler.requested_swaps(10), 7);
    /// assert_eq!(shuffler.requested_swaps(3), 3);
    /// # Ok::<(), netshuffle_core::ShuffleError>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the target is a non-negative float rounded to a whole number"
    )]
    pub fn requested_swaps(&self, edges: usize) -> usize {
        let raw = self.swap_multiplier * edges as f64;
        let nearest = raw.round();
        let target = if (raw - nearest).abs() <= TARGET_ROUNDING_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            raw.ceil()
        };
        // Float-to-int casts saturate, so huge targets clamp to usize::MAX.
        target as usize
    }

    /// Shuffles an independent copy of `graph`.
    ///
    /// When no seed was configured a fresh one is drawn and recorded in the
    /// report, so any run can be reproduced with
    /// [`ShufflerBuilder::with_seed`].
    #[instrument(
        name = "core.shuffle",
        skip(self, graph),
        fields(
            graph = %graph.name(),
            edges = graph.edge_count(),
            multiplier = self.swap_multiplier,
            seed = field::Empty,
            status = field::Empty,
        ),
    )]
    pub fn shuffle(&self, graph: &Graph) -> ShuffleOutcome {
        let seed = self.seed.unwrap_or_else(rand::random);
        let span = Span::current();
        span.record("seed", seed);

        let outcome = self.run(graph, seed);
        span.record("status", field::display(outcome.report.status));
        let report = &outcome.report;
        info!(
            requested = report.requested_swaps,
            performed = report.performed_swaps,
            attempts = report.attempts,
            status = %report.status,
            "shuffle finished"
        );
        outcome
    }

    fn run(&self, graph: &Graph, seed: u64) -> ShuffleOutcome {
        let mut shuffled = graph.clone();
        let requested_swaps = self.requested_swaps(graph.edge_count());
        let max_attempts = requested_swaps.saturating_mul(self.max_attempts_per_swap.get());
        let mut report = ShuffleReport {
            requested_swaps,
            performed_swaps: 0,
            attempts: 0,
            max_attempts,
            seed,
            rejections: RejectionCounts::default(),
            status: ShuffleStatus::Completed,
        };

        if requested_swaps == 0 {
            return ShuffleOutcome {
                graph: shuffled,
                report,
            };
        }
        if !admits_swaps(&shuffled) {
            warn!(
                graph = graph.name(),
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "graph admits no valid swap, returning it unchanged"
            );
            report.status = ShuffleStatus::NoValidSwaps;
            return ShuffleOutcome {
                graph: shuffled,
                report,
            };
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        while report.performed_swaps < requested_swaps {
            if report.attempts >= max_attempts {
                warn!(
                    graph = graph.name(),
                    max_attempts,
                    requested = requested_swaps,
                    performed = report.performed_swaps,
                    "maximum number of swap attempts exceeded before desired swaps achieved"
                );
                report.status = ShuffleStatus::AttemptLimitReached;
                break;
            }
            report.attempts += 1;
            match attempt_swap(&mut shuffled, &mut rng) {
                Attempt::Swapped => report.performed_swaps += 1,
                Attempt::SameEdge => report.rejections.same_edge += 1,
                Attempt::SharedEndpoint => report.rejections.shared_endpoint += 1,
                Attempt::WouldDuplicate => report.rejections.would_duplicate += 1,
            }
        }
        debug!(
            same_edge = report.rejections.same_edge,
            shared_endpoint = report.rejections.shared_endpoint,
            would_duplicate = report.rejections.would_duplicate,
            "swap rejections"
        );

        ShuffleOutcome {
            graph: shuffled,
            report,
        }
    }
}

/// Screens out graphs in which no double edge swap can succeed.
///
/// Small graphs are scanned exhaustively. Larger ones only get the structural
/// checks and may still have no valid swap; the attempt cap bounds those runs.
pub(crate) fn admits_swaps(graph: &Graph) -> bool {
    let nodes = graph.node_count();
    let edges = graph.edge_count();
    if nodes < 4 || edges < 2 {
        return false;
    }
    let complete = nodes.saturating_mul(nodes - 1) / 2;
    if edges >= complete {
        return false;
    }
    let max_degree = graph.degrees().into_iter().max().unwrap_or(0);
    if max_degree >= edges {
        return false;
    }
    edges > EXACT_SWAP_SCAN_EDGE_LIMIT || has_valid_swap(graph)
}
