//! Property-based checks for the degree-preserving shuffler.

mod strategies;
