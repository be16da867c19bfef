//! Command-line interface for the netshuffle edge shuffler.
//!
//! `shuffle` loads an edge list, writes a degree-preserving randomisation of
//! it next to a chosen output directory and reports how many edges survived.
//! `compare` reloads two edge lists and reports their edge similarity.

mod commands;
mod summary;

pub use commands::{
    Cli, CliError, Command, CompareCommand, DelimiterArg, IdTypeArg, LoaderArgs, ShuffleCommand,
    run_cli,
};
pub use summary::{CompareSummary, ExecutionSummary, GraphSummary, ShuffleSummary, render_summary};

#[cfg(test)]
mod test_helpers;
