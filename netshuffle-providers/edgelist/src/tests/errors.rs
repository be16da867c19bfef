use std::io;
use std::path::PathBuf;

use rstest::rstest;

use super::EdgeListError;
use crate::EdgeListErrorCode;

#[rstest]
#[case::duplicate_columns(EdgeListError::DuplicateColumns { column: 1 }, "EDGE_LIST_DUPLICATE_COLUMNS")]
#[case::out_of_range(
    EdgeListError::ColumnOutOfRange { column: 4, available: 2 },
    "EDGE_LIST_COLUMN_OUT_OF_RANGE"
)]
#[case::open(
    EdgeListError::Open { path: PathBuf::from("missing.txt"), source: io::Error::other("boom") },
    "EDGE_LIST_OPEN_FAILED"
)]
#[case::io(EdgeListError::from(io::Error::other("boom")), "EDGE_LIST_IO")]
fn error_codes_are_stable(#[case] err: EdgeListError, #[case] expected: &str) {
    assert_eq!(err.code().as_str(), expected);
}

#[rstest]
fn code_display_matches_as_str() {
    let code = EdgeListErrorCode::Write;
    assert_eq!(code.to_string(), code.as_str());
}

#[rstest]
fn out_of_range_message_names_the_column() {
    let err = EdgeListError::ColumnOutOfRange {
        column: 3,
        available: 2,
    };
    assert_eq!(
        err.to_string(),
        "column 3 is out of range: header has 2 fields"
    );
}

#[rstest]
#[case::duplicate_names(
    EdgeListError::DuplicateColumnNames { name: "Node_A".to_owned() },
    "output column names must differ (both are `Node_A`)"
)]
#[case::write(
    EdgeListError::Write { path: PathBuf::from("out/ppi_shuffled.txt"), source: io::Error::other("disk full") },
    "failed to write `out/ppi_shuffled.txt`: disk full"
)]
#[case::open(
    EdgeListError::Open { path: PathBuf::from("ppi.txt"), source: io::Error::other("denied") },
    "failed to open `ppi.txt`: denied"
)]
fn messages_name_the_offending_value(#[case] err: EdgeListError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}
