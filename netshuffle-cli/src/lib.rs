//! Support library for the netshuffle CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and integration
//! tests can drive the binary's behaviour without forking a subprocess.

pub mod cli;
pub mod logging;
