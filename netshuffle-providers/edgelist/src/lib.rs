//! Delimited edge-list reader and writer for netshuffle graphs.

mod errors;
mod options;
mod reader;
mod writer;

pub use errors::{EdgeListError, EdgeListErrorCode};
pub use options::{Delimiter, EdgeListOptions, NodeIdKind, TEST_MODE_ROW_LIMIT};
pub use reader::{EdgeListReader, LoadStats, LoadedEdges};
pub use writer::{
    DEFAULT_SOURCE_COLUMN, DEFAULT_TARGET_COLUMN, EdgeListWriter, WriterOptions,
    shuffled_output_path,
};

#[cfg(test)]
mod tests;
