//! Benchmark support crate for netshuffle.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for shuffling and similarity reporting.

pub mod error;
pub mod params;
pub mod source;
