//! Error types raised while reading and writing edge lists.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`crate::EdgeListReader`] and [`crate::EdgeListWriter`].
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Source and target columns point at the same field.
    #[error("source and target columns must differ (both are {column})")]
    DuplicateColumns {
        /// The column selected for both endpoints.
        column: usize,
    },
    /// The header row has fewer fields than a selected column needs.
    #[error("column {column} is out of range: header has {available} fields")]
    ColumnOutOfRange {
        /// Highest selected column index.
        column: usize,
        /// Number of fields in the header row.
        available: usize,
    },
    /// The writer was asked to label both output columns identically.
    #[error("output column names must differ (both are `{name}`)")]
    DuplicateColumnNames {
        /// The repeated column name.
        name: String,
    },
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Writing or persisting the output file failed.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Destination path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading from the input stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

netshuffle_core::define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// Source and target columns were equal.
        DuplicateColumns => DuplicateColumns { .. } => "EDGE_LIST_DUPLICATE_COLUMNS",
        /// A requested column is missing from the header.
        ColumnOutOfRange => ColumnOutOfRange { .. } => "EDGE_LIST_COLUMN_OUT_OF_RANGE",
        /// Output header names were equal.
        DuplicateColumnNames => DuplicateColumnNames { .. } => "EDGE_LIST_DUPLICATE_COLUMN_NAMES",
        /// The input file could not be opened.
        Open => Open { .. } => "EDGE_LIST_OPEN_FAILED",
        /// The output file could not be written or persisted.
        Write => Write { .. } => "EDGE_LIST_WRITE_FAILED",
        /// Reading from the input stream failed.
        Io => Io { .. } => "EDGE_LIST_IO",
    }
}
