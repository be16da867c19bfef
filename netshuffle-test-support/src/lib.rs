//! Shared test utilities used across netshuffle crates.

pub mod fixtures;
pub mod proptest_profile;
pub mod tracing;
