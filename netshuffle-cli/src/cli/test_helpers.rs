//! Small helpers shared across CLI tests.

use std::path::{Path, PathBuf};

use super::{CliError, LoaderArgs, ShuffleCommand};

pub(super) type TestResult = Result<(), Box<dyn std::error::Error>>;

pub(super) fn shuffle_command(input: PathBuf, out_dir: &Path) -> ShuffleCommand {
    ShuffleCommand {
        input,
        out_dir: out_dir.to_path_buf(),
        suffix: None,
        swaps: 1.0,
        max_attempts_per_swap: 10,
        seed: Some(17),
        test_mode: false,
        verbose: false,
        loader: LoaderArgs::default(),
    }
}

pub(super) fn ring_pairs(nodes: usize) -> Vec<(String, String)> {
    (0..nodes)
        .map(|index| ((index + 1).to_string(), ((index + 1) % nodes + 1).to_string()))
        .collect()
}

pub(super) fn ring_edge_list(nodes: usize) -> String {
    let pairs = ring_pairs(nodes);
    let borrowed: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(source, target)| (source.as_str(), target.as_str()))
        .collect();
    netshuffle_test_support::fixtures::tab_edge_list(&borrowed)
}

pub(super) fn expect_error<T>(result: Result<T, CliError>, panic_msg: &str) -> CliError {
    match result {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
