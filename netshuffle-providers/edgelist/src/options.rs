//! Loader configuration: column selection, delimiter, header handling and
//! node identifier normalisation.

use crate::errors::EdgeListError;

/// Data rows read when test mode is enabled.
pub const TEST_MODE_ROW_LIMIT: usize = 1000;

/// Field separator of an edge-list file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// A single tab between fields.
    #[default]
    Tab,
    /// Any run of spaces or tabs. Written back out as tabs.
    Whitespace,
    /// A single comma between fields.
    Comma,
}

impl Delimiter {
    pub(crate) fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Tab => line.split('\t').collect(),
            Self::Comma => line.split(',').collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }

    /// Separator written between output fields.
    #[must_use]
    pub const fn output_separator(self) -> char {
        match self {
            Self::Tab | Self::Whitespace => '\t',
            Self::Comma => ',',
        }
    }
}

/// How node identifiers are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeIdKind {
    /// Integer gene identifiers. Values are canonicalised so `"007"`,
    /// `"7"` and `"7.0"` name the same node; anything else is malformed.
    #[default]
    Entrez,
    /// Free-form symbols, compared after trimming surrounding whitespace.
    Symbol,
}

impl NodeIdKind {
    /// Canonical label for a raw field, or `None` when the field is not a
    /// valid identifier of this kind.
    ///
    /// # Examples
    /// ```
    /// use netshuffle_providers_edgelist::NodeIdKind;
    ///
    /// assert_eq!(NodeIdKind::Entrez.normalise(" 0042 ").as_deref(), Some("42"));
    /// assert_eq!(NodeIdKind::Entrez.normalise("12.0").as_deref(), Some("12"));
    /// assert_eq!(NodeIdKind::Entrez.normalise("TP53"), None);
    /// assert_eq!(NodeIdKind::Symbol.normalise("TP53").as_deref(), Some("TP53"));
    /// ```
    #[must_use]
    pub fn normalise(self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self {
            Self::Symbol => Some(trimmed.to_owned()),
            Self::Entrez => normalise_entrez(trimmed),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the float is integral and checked against the i64 range first"
)]
fn normalise_entrez(field: &str) -> Option<String> {
    if let Ok(value) = field.parse::<i64>() {
        return Some(value.to_string());
    }
    let value = field.parse::<f64>().ok()?;
    // i64::MAX is not representable, so the upper bound is exclusive 2^63.
    let in_range = value >= -9_223_372_036_854_775_808.0 && value < 9_223_372_036_854_775_808.0;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| (value as i64).to_string())
}

/// Options controlling how an edge list is read.
///
/// # Examples
/// ```
/// use netshuffle_providers_edgelist::{Delimiter, EdgeListOptions, NodeIdKind};
///
/// let options = EdgeListOptions::new()
///     .with_columns(1, 2)
///     .with_delimiter(Delimiter::Comma)
///     .with_id_kind(NodeIdKind::Symbol)
///     .with_test_mode(true);
/// assert_eq!(options.columns(), (1, 2));
/// assert_eq!(options.row_limit(), Some(1000));
/// assert!(options.has_header());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeListOptions {
    columns: (usize, usize),
    row_limit: Option<usize>,
    delimiter: Delimiter,
    has_header: bool,
    id_kind: NodeIdKind,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self {
            columns: (0, 1),
            row_limit: None,
            delimiter: Delimiter::default(),
            has_header: true,
            id_kind: NodeIdKind::default(),
        }
    }
}

impl EdgeListOptions {
    /// Creates options for a headed, tab-delimited Entrez edge list using the
    /// first two columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the zero-based source and target columns.
    #[must_use]
    pub fn with_columns(mut self, source: usize, target: usize) -> Self {
        self.columns = (source, target);
        self
    }

    /// Caps the number of data rows read. `None` reads the whole file.
    #[must_use]
    pub fn with_row_limit(mut self, limit: Option<usize>) -> Self {
        self.row_limit = limit;
        self
    }

    /// Enables or disables the [`TEST_MODE_ROW_LIMIT`] cap.
    #[must_use]
    pub fn with_test_mode(self, enabled: bool) -> Self {
        self.with_row_limit(enabled.then_some(TEST_MODE_ROW_LIMIT))
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Declares whether the first non-blank line is a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets how node identifiers are interpreted.
    #[must_use]
    pub fn with_id_kind(mut self, id_kind: NodeIdKind) -> Self {
        self.id_kind = id_kind;
        self
    }

    /// Zero-based source and target column indices.
    #[must_use]
    pub fn columns(&self) -> (usize, usize) {
        self.columns
    }

    /// Maximum number of data rows read, if capped.
    #[must_use]
    pub fn row_limit(&self) -> Option<usize> {
        self.row_limit
    }

    /// Field delimiter.
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Whether a header row precedes the data.
    #[must_use]
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Identifier interpretation.
    #[must_use]
    pub fn id_kind(&self) -> NodeIdKind {
        self.id_kind
    }

    pub(crate) fn validate(&self) -> Result<(), EdgeListError> {
        let (source, target) = self.columns;
        if source == target {
            return Err(EdgeListError::DuplicateColumns { column: source });
        }
        Ok(())
    }
}
