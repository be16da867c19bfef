//! Single double-edge-swap attempt.
//!
//! Given edge slots holding `(a, b)` and `(c, d)`, a swap rewires them to
//! `(a, d)` and `(c, b)`. Every endpoint keeps its degree because only its
//! partner changes. The swap is rejected when the endpoints are not four
//! distinct nodes or when either new edge already exists.

use rand::Rng;

use crate::graph::{Edge, Graph};

/// Result of one swap attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Attempt {
    /// The two edges were rewired.
    Swapped,
    /// Both draws selected the same edge slot.
    SameEdge,
    /// The two edges share an endpoint, so a swap would create a self-loop or
    /// reproduce an existing edge.
    SharedEndpoint,
    /// One of the rewired edges is already present.
    WouldDuplicate,
}

/// Candidate rewiring of two edge slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SwapPlan {
    pub(crate) first: (usize, Edge),
    pub(crate) second: (usize, Edge),
}

/// Validates the rewiring of the edges held in slots `first` and `second`.
///
/// `flip` selects which endpoint of the second edge is exchanged: without it
/// `(a, b)` and `(c, d)` become `(a, d)` and `(c, b)`; with it they become
/// `(a, c)` and `(d, b)`.
pub(crate) fn plan_swap(
    graph: &Graph,
    first: usize,
    second: usize,
    flip: bool,
) -> Result<SwapPlan, Attempt> {
    if first == second {
        return Err(Attempt::SameEdge);
    }
    let (Some(&left), Some(&right)) = (graph.edges().get(first), graph.edges().get(second)) else {
        return Err(Attempt::SameEdge);
    };
    let (a, b) = left.endpoints();
    let (c, d) = if flip {
        (right.high(), right.low())
    } else {
        right.endpoints()
    };
    if right.touches(a) || right.touches(b) {
        return Err(Attempt::SharedEndpoint);
    }
    let (Some(first_new), Some(second_new)) = (Edge::new(a, d), Edge::new(c, b)) else {
        return Err(Attempt::SharedEndpoint);
    };
    if graph.contains_edge(first_new) || graph.contains_edge(second_new) {
        return Err(Attempt::WouldDuplicate);
    }
    Ok(SwapPlan {
        first: (first, first_new),
        second: (second, second_new),
    })
}

/// Returns whether any pair of edge slots admits a valid swap in either
/// orientation. Quadratic in the edge count.
pub(crate) fn has_valid_swap(graph: &Graph) -> bool {
    let slots = graph.edge_count();
    (0..slots).any(|first| {
        (first + 1..slots).any(|second| {
            [false, true]
                .into_iter()
                .any(|flip| plan_swap(graph, first, second, flip).is_ok())
        })
    })
}

/// Draws two edge slots and an orientation from `rng` and applies the swap
/// when it is valid.
pub(crate) fn attempt_swap<R: Rng>(graph: &mut Graph, rng: &mut R) -> Attempt {
    let slots = graph.edge_count();
    if slots < 2 {
        return Attempt::SameEdge;
    }
    let first = rng.gen_range(0..slots);
    let second = rng.gen_range(0..slots);
    let flip = rng.gen_bool(0.5);
    match plan_swap(graph, first, second, flip) {
        Ok(plan) => {
            graph.replace_pair(plan.first, plan.second);
            Attempt::Swapped
        }
        Err(rejected) => rejected,
    }
}
