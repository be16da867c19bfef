//! Unit tests for edge-list loading and writing.

pub(crate) use super::{
    Delimiter, EdgeListError, EdgeListOptions, EdgeListReader, EdgeListWriter, NodeIdKind,
    WriterOptions,
};

mod errors;
mod options;

pub(crate) fn reader(options: EdgeListOptions) -> EdgeListReader {
    EdgeListReader::new(options).expect("reader options must be valid")
}

pub(crate) fn pairs(loaded: &crate::LoadedEdges) -> Vec<(&str, &str)> {
    loaded
        .edges
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}
