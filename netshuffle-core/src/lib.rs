//! netshuffle core library.
//!
//! Builds undirected simple graphs from raw edge lists, randomises them with
//! degree-preserving double edge swaps, and measures how many edges a shuffle
//! left in place.

mod error;
mod graph;
mod shuffle;
mod similarity;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    error::{Result, ShuffleError, ShuffleErrorCode},
    graph::{BuildStats, Edge, Graph, GraphBuilder, NodeId, RawEdge},
    shuffle::{
        DEFAULT_MAX_ATTEMPTS_PER_SWAP, DEFAULT_SWAP_MULTIPLIER, MAX_SWAP_MULTIPLIER,
        RejectionCounts, ShuffleOutcome, ShuffleReport, ShuffleStatus, Shuffler, ShufflerBuilder,
    },
    similarity::{EdgeSimilarity, edge_similarity},
};
