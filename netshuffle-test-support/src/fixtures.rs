//! Edge-list fixture files for loader, writer and CLI tests.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// Header row written by [`tab_edge_list`].
pub const FIXTURE_HEADER: &str = "Node_A\tNode_B";

/// Creates a temporary directory, panicking with context on failure.
#[must_use]
pub fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Writes `contents` to `dir/name` and returns the path.
///
/// # Errors
/// Returns any I/O error raised while writing the file.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Renders a tab-delimited edge list with a header row.
///
/// # Examples
/// ```
/// use netshuffle_test_support::fixtures::tab_edge_list;
///
/// let text = tab_edge_list(&[("A", "B"), ("C", "D")]);
/// assert_eq!(text, "Node_A\tNode_B\nA\tB\nC\tD\n");
/// ```
#[must_use]
pub fn tab_edge_list(pairs: &[(&str, &str)]) -> String {
    let mut text = format!("{FIXTURE_HEADER}\n");
    for (source, target) in pairs {
        let _ = writeln!(text, "{source}\t{target}");
    }
    text
}

/// Renders a tab-delimited edge list of `rows` integer edges forming a long
/// path, `i -> i + 1`, with a third score column that loaders must ignore.
#[must_use]
pub fn numbered_path_edge_list(rows: usize) -> String {
    let mut text = String::from("source\ttarget\tscore\n");
    for index in 0..rows {
        let _ = writeln!(text, "{}\t{}\t0.5", index + 1, index + 2);
    }
    text
}
