//! Atomic edge-list writer.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use netshuffle_core::Graph;
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::{errors::EdgeListError, options::Delimiter};

/// Header name of the first output column.
pub const DEFAULT_SOURCE_COLUMN: &str = "Node_A";
/// Header name of the second output column.
pub const DEFAULT_TARGET_COLUMN: &str = "Node_B";

/// Output layout for [`EdgeListWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    delimiter: Delimiter,
    header: Option<(String, String)>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Tab,
            header: Some((
                DEFAULT_SOURCE_COLUMN.to_owned(),
                DEFAULT_TARGET_COLUMN.to_owned(),
            )),
        }
    }
}

impl WriterOptions {
    /// Tab-delimited output headed `Node_A`/`Node_B`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output delimiter. [`Delimiter::Whitespace`] writes tabs.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the header row, or omits it when `None`.
    #[must_use]
    pub fn with_header(mut self, header: Option<(String, String)>) -> Self {
        self.header = header;
        self
    }

    /// Output delimiter.
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Header row, if one is written.
    #[must_use]
    pub fn header(&self) -> Option<(&str, &str)> {
        self.header
            .as_ref()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }
}

/// Writes graphs as two-column edge lists, one edge per row in slot order.
#[derive(Clone, Debug)]
pub struct EdgeListWriter {
    options: WriterOptions,
}

impl EdgeListWriter {
    /// Validates `options` and creates a writer.
    ///
    /// # Errors
    /// Returns [`EdgeListError::DuplicateColumnNames`] when both header names
    /// are equal.
    pub fn new(options: WriterOptions) -> Result<Self, EdgeListError> {
        if let Some((source, target)) = options.header()
            && source == target
        {
            return Err(EdgeListError::DuplicateColumnNames {
                name: source.to_owned(),
            });
        }
        Ok(Self { options })
    }

    /// Writes `graph` to `output` and returns the number of edge rows.
    ///
    /// # Errors
    /// Propagates any error raised by `output`.
    ///
    /// # Examples
    /// ```
    /// use netshuffle_core::{Graph, RawEdge};
    /// use netshuffle_providers_edgelist::{EdgeListWriter, WriterOptions};
    ///
    /// let graph = Graph::from_raw_edges("demo", [RawEdge::new("1", "2")]);
    /// let writer = EdgeListWriter::new(WriterOptions::new())?;
    /// let mut buffer = Vec::new();
    /// writer.write(&graph, &mut buffer)?;
    /// assert_eq!(buffer, b"Node_A\tNode_B\n1\t2\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write<W: Write>(&self, graph: &Graph, mut output: W) -> io::Result<usize> {
        let separator = self.options.delimiter().output_separator();
        if let Some((source, target)) = self.options.header() {
            writeln!(output, "{source}{separator}{target}")?;
        }
        let mut rows = 0;
        for (source, target) in graph.labelled_edges() {
            writeln!(output, "{source}{separator}{target}")?;
            rows += 1;
        }
        Ok(rows)
    }

    /// Writes `graph` to `path` through a temporary file in the same
    /// directory, so readers never observe a partial file.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Write`] when the temporary file cannot be
    /// created, written, or moved into place.
    #[instrument(
        name = "edgelist.write",
        skip(self, graph, path),
        fields(path = %path.display(), edges = graph.edge_count()),
    )]
    pub fn write_atomic(&self, graph: &Graph, path: &Path) -> Result<usize, EdgeListError> {
        let wrap = |source: io::Error| EdgeListError::Write {
            path: path.to_path_buf(),
            source,
        };
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(directory).map_err(wrap)?;
        let rows = {
            let mut buffered = BufWriter::new(&mut temp);
            let rows = self.write(graph, &mut buffered).map_err(wrap)?;
            buffered.flush().map_err(wrap)?;
            rows
        };
        temp.persist(path).map_err(|err| wrap(err.error))?;
        debug!(rows, "edge list written");
        Ok(rows)
    }
}

/// Output path for a shuffled copy of `input`:
/// `<out_dir>/<stem>_shuffled[_<suffix>].txt`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use netshuffle_providers_edgelist::shuffled_output_path;
///
/// let path = shuffled_output_path(Path::new("data/ppi.txt"), Path::new("out"), Some("r1"));
/// assert_eq!(path, Path::new("out/ppi_shuffled_r1.txt"));
/// ```
#[must_use]
pub fn shuffled_output_path(input: &Path, out_dir: &Path, suffix: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "edge_list".to_owned(), |stem| stem.to_string_lossy().into_owned());
    let file_name = match suffix.filter(|suffix| !suffix.is_empty()) {
        Some(suffix) => format!("{stem}_shuffled_{suffix}.txt"),
        None => format!("{stem}_shuffled.txt"),
    };
    out_dir.join(file_name)
}
