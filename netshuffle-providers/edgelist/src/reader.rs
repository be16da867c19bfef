//! Streaming edge-list reader.
//!
//! Rows that cannot be parsed (invalid UTF-8, too few fields, empty or non-integer
//! identifiers) are skipped with a warning rather than aborting the load;
//! only structural problems such as an out-of-range column are fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use netshuffle_core::RawEdge;
use tracing::{Span, debug, field, instrument, warn};

use crate::{errors::EdgeListError, options::EdgeListOptions};

/// Row accounting for a completed load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-blank data rows consumed, including skipped ones.
    pub rows_read: usize,
    /// Rows skipped because they could not be parsed.
    pub rows_skipped: usize,
    /// Whether the row limit stopped the load before the end of the input.
    pub truncated: bool,
}

/// Edges read from an edge list together with load diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedEdges {
    /// Parsed edges in file order. Self-loops and duplicates are kept; the
    /// graph builder discards them.
    pub edges: Vec<RawEdge>,
    /// Header names of the selected source and target columns, when the
    /// input has a header.
    pub column_names: Option<(String, String)>,
    /// Row accounting.
    pub stats: LoadStats,
}

/// Reads delimited edge lists according to [`EdgeListOptions`].
///
/// # Examples
/// ```
/// use netshuffle_providers_edgelist::{EdgeListOptions, EdgeListReader};
///
/// let reader = EdgeListReader::new(EdgeListOptions::new())?;
/// let loaded = reader.read("Node_A\tNode_B\n1\t2\n02\t3\nbad\n".as_bytes())?;
/// assert_eq!(loaded.edges.len(), 2);
/// assert_eq!(loaded.edges[1].source(), "2");
/// assert_eq!(loaded.stats.rows_skipped, 1);
/// # Ok::<(), netshuffle_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeListReader {
    options: EdgeListOptions,
}

impl EdgeListReader {
    /// Validates `options` and creates a reader.
    ///
    /// # Errors
    /// Returns [`EdgeListError::DuplicateColumns`] when the source and target
    /// columns are the same.
    pub fn new(options: EdgeListOptions) -> Result<Self, EdgeListError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options this reader was created with.
    #[must_use]
    pub fn options(&self) -> &EdgeListOptions {
        &self.options
    }

    /// Opens and reads the edge list at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Open`] when the file cannot be opened, and
    /// otherwise any error from [`EdgeListReader::read`].
    #[instrument(
        name = "edgelist.read",
        skip(self, path),
        fields(path = %path.display(), rows = field::Empty, edges = field::Empty),
    )]
    pub fn read_path(&self, path: &Path) -> Result<LoadedEdges, EdgeListError> {
        let file = File::open(path).map_err(|source| EdgeListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = self.read(BufReader::new(file))?;
        let span = Span::current();
        span.record("rows", loaded.stats.rows_read);
        span.record("edges", loaded.edges.len());
        Ok(loaded)
    }

    /// Reads an edge list from `input`.
    ///
    /// Blank lines are ignored everywhere. When the options declare a header
    /// the first non-blank line is consumed as one and must contain both
    /// selected columns. Data rows that are not valid UTF-8 are skipped like
    /// any other malformed row.
    ///
    /// # Errors
    /// Returns [`EdgeListError::ColumnOutOfRange`] when the header lacks a
    /// selected column and [`EdgeListError::Io`] when reading fails.
    pub fn read<R: BufRead>(&self, mut input: R) -> Result<LoadedEdges, EdgeListError> {
        let mut loaded = LoadedEdges::default();
        let mut header_pending = self.options.has_header();
        let mut buffer = Vec::new();
        let mut line_number = 0_usize;

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;
            let raw = strip_line_ending(&buffer);
            let text = std::str::from_utf8(raw).ok();
            if text.is_some_and(|text| text.trim().is_empty()) {
                continue;
            }

            if header_pending {
                header_pending = false;
                loaded.column_names = Some(self.parse_header(&String::from_utf8_lossy(raw))?);
                continue;
            }

            if self
                .options
                .row_limit()
                .is_some_and(|limit| loaded.stats.rows_read >= limit)
            {
                loaded.stats.truncated = true;
                break;
            }
            loaded.stats.rows_read += 1;
            match text.and_then(|text| self.parse_row(text)) {
                Some(edge) => loaded.edges.push(edge),
                None => {
                    loaded.stats.rows_skipped += 1;
                    warn!(
                        line = line_number,
                        utf8 = text.is_some(),
                        "skipping malformed edge-list row"
                    );
                }
            }
        }

        debug!(
            rows = loaded.stats.rows_read,
            skipped = loaded.stats.rows_skipped,
            truncated = loaded.stats.truncated,
            "edge list loaded"
        );
        Ok(loaded)
    }

    fn parse_header(&self, text: &str) -> Result<(String, String), EdgeListError> {
        let (source_col, target_col) = self.options.columns();
        let fields = self.options.delimiter().split(text);
        let (Some(source), Some(target)) = (fields.get(source_col), fields.get(target_col)) else {
            return Err(EdgeListError::ColumnOutOfRange {
                column: source_col.max(target_col),
                available: fields.len(),
            });
        };
        Ok((source.trim().to_owned(), target.trim().to_owned()))
    }

    fn parse_row(&self, text: &str) -> Option<RawEdge> {
        let (source_col, target_col) = self.options.columns();
        let id_kind = self.options.id_kind();
        let fields = self.options.delimiter().split(text);
        let source = id_kind.normalise(fields.get(source_col)?)?;
        let target = id_kind.normalise(fields.get(target_col)?)?;
        Some(RawEdge::new(source, target))
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
