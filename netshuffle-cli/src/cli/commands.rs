//! Command implementations and argument parsing for the netshuffle CLI.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netshuffle_core::{
    DEFAULT_MAX_ATTEMPTS_PER_SWAP, DEFAULT_SWAP_MULTIPLIER, Graph, GraphBuilder, ShuffleError,
    ShufflerBuilder, edge_similarity,
};
use netshuffle_providers_edgelist::{
    DEFAULT_SOURCE_COLUMN, DEFAULT_TARGET_COLUMN, Delimiter, EdgeListError, EdgeListOptions,
    EdgeListReader, EdgeListWriter, NodeIdKind, WriterOptions, shuffled_output_path,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::summary::{CompareSummary, ExecutionSummary, GraphSummary, ShuffleSummary};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netshuffle",
    about = "Randomise a network with degree-preserving double edge swaps."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Shuffle an edge list and write the result.
    Shuffle(ShuffleCommand),
    /// Report the edge similarity of two edge lists.
    Compare(CompareCommand),
}

/// Options accepted by the `shuffle` command.
#[derive(Debug, Args, Clone)]
pub struct ShuffleCommand {
    /// Edge list to shuffle.
    pub input: PathBuf,

    /// Directory receiving `<stem>_shuffled[_<suffix>].txt`.
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: PathBuf,

    /// Extra tag appended to the output file name.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Successful swaps to perform per edge.
    #[arg(long = "swaps", default_value_t = DEFAULT_SWAP_MULTIPLIER)]
    pub swaps: f64,

    /// Attempts allowed per requested swap before giving up.
    #[arg(long = "max-attempts-per-swap", default_value_t = DEFAULT_MAX_ATTEMPTS_PER_SWAP)]
    pub max_attempts_per_swap: usize,

    /// Seed for the random generator; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only read the first 1000 data rows.
    #[arg(long = "test-mode")]
    pub test_mode: bool,

    /// Print a run summary to stdout.
    #[arg(short, long)]
    pub verbose: bool,

    /// Input format.
    #[command(flatten)]
    pub loader: LoaderArgs,
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone)]
pub struct CompareCommand {
    /// Reference edge list.
    pub original: PathBuf,

    /// Edge list compared against the reference.
    pub shuffled: PathBuf,

    /// Format shared by both inputs.
    #[command(flatten)]
    pub loader: LoaderArgs,
}

/// Edge-list format options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct LoaderArgs {
    /// Zero-based source and target column indices.
    #[arg(
        long = "node-cols",
        num_args = 2,
        value_names = ["SOURCE", "TARGET"],
        default_values_t = [0_usize, 1],
    )]
    pub node_cols: Vec<usize>,

    /// Field delimiter.
    #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
    pub delimiter: DelimiterArg,

    /// Treat the first line as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// How node identifiers are interpreted.
    #[arg(long = "id-type", value_enum, default_value_t = IdTypeArg::Entrez)]
    pub id_type: IdTypeArg,
}

impl Default for LoaderArgs {
    fn default() -> Self {
        Self {
            node_cols: vec![0, 1],
            delimiter: DelimiterArg::Tab,
            no_header: false,
            id_type: IdTypeArg::Entrez,
        }
    }
}

impl LoaderArgs {
    pub(super) fn columns(&self) -> (usize, usize) {
        match self.node_cols.as_slice() {
            [source, target, ..] => (*source, *target),
            _ => (0, 1),
        }
    }

    fn edge_list_options(&self) -> EdgeListOptions {
        let (source, target) = self.columns();
        EdgeListOptions::new()
            .with_columns(source, target)
            .with_delimiter(self.delimiter.into())
            .with_header(!self.no_header)
            .with_id_kind(self.id_type.into())
    }
}

/// Delimiters accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    /// Tab-separated fields.
    Tab,
    /// Fields separated by any run of whitespace.
    Whitespace,
    /// Comma-separated fields.
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Tab => Self::Tab,
            DelimiterArg::Whitespace => Self::Whitespace,
            DelimiterArg::Comma => Self::Comma,
        }
    }
}

/// Node identifier kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdTypeArg {
    /// Integer gene identifiers.
    Entrez,
    /// Gene symbols.
    Symbol,
}

impl From<IdTypeArg> for NodeIdKind {
    fn from(value: IdTypeArg) -> Self {
        match value {
            IdTypeArg::Entrez => Self::Entrez,
            IdTypeArg::Symbol => Self::Symbol,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or writing an edge list failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The shuffler configuration was rejected.
    #[error(transparent)]
    Shuffle(#[from] ShuffleError),
    /// The input produced no edges once malformed rows, self-loops and
    /// duplicates were removed.
    #[error("`{path}` contains no usable edges")]
    NoEdges {
        /// Input that yielded nothing.
        path: PathBuf,
    },
}

impl CliError {
    /// Stable machine-readable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EdgeList(err) => err.code().as_str(),
            Self::Shuffle(err) => err.code().as_str(),
            Self::NoEdges { .. } => "CLI_NO_EDGES",
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, shuffling or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netshuffle_cli::cli::{Cli, Command, LoaderArgs, ShuffleCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("ring.txt");
/// std::fs::write(&input, "a\tb\n1\t2\n2\t3\n3\t4\n4\t5\n5\t6\n6\t1\n")?;
/// let cli = Cli {
///     command: Command::Shuffle(ShuffleCommand {
///         input,
///         out_dir: dir.path().to_path_buf(),
///         suffix: None,
///         swaps: 1.0,
///         max_attempts_per_swap: 10,
///         seed: Some(7),
///         test_mode: false,
///         verbose: false,
///         loader: LoaderArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(dir.path().join("ring_shuffled.txt").exists());
/// assert!(!summary.wants_stdout());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Shuffle(command) => {
            span.record("command", "shuffle");
            run_shuffle(command).map(ExecutionSummary::Shuffle)
        }
        Command::Compare(command) => {
            span.record("command", "compare");
            run_compare(&command).map(ExecutionSummary::Compare)
        }
    }
}

#[instrument(
    name = "cli.shuffle",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        out_dir = %command.out_dir.display(),
        swaps = command.swaps,
        test_mode = command.test_mode,
        output = field::Empty,
    ),
)]
pub(super) fn run_shuffle(command: ShuffleCommand) -> Result<ShuffleSummary, CliError> {
    let arguments = command.clone();
    let shuffler = ShufflerBuilder::new()
        .with_swap_multiplier(command.swaps)
        .with_max_attempts_per_swap(command.max_attempts_per_swap)
        .with_optional_seed(command.seed)
        .build()?;
    let options = command
        .loader
        .edge_list_options()
        .with_test_mode(command.test_mode);
    let writer_options = WriterOptions::new()
        .with_delimiter(options.delimiter())
        .with_header(options.has_header().then(|| {
            (
                DEFAULT_SOURCE_COLUMN.to_owned(),
                DEFAULT_TARGET_COLUMN.to_owned(),
            )
        }));
    let writer = EdgeListWriter::new(writer_options)?;

    let loaded = load_graph(&command.input, options)?;
    if loaded.graph.is_empty() {
        return Err(CliError::NoEdges {
            path: command.input,
        });
    }

    let outcome = shuffler.shuffle(&loaded.graph);
    let similarity = edge_similarity(&loaded.graph, outcome.graph());
    let output = shuffled_output_path(&command.input, &command.out_dir, command.suffix.as_deref());
    Span::current().record("output", field::display(output.display()));
    writer.write_atomic(outcome.graph(), &output)?;

    let report = *outcome.report();
    info!(
        output = %output.display(),
        performed = report.performed_swaps,
        similarity = similarity.map(|value| value.ratio()),
        "shuffle command completed"
    );
    Ok(ShuffleSummary {
        input: command.input,
        output,
        arguments,
        graph: loaded.summary,
        report,
        similarity,
    })
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(
        original = %command.original.display(),
        shuffled = %command.shuffled.display(),
    ),
)]
pub(super) fn run_compare(command: &CompareCommand) -> Result<CompareSummary, CliError> {
    let options = command.loader.edge_list_options();
    let original = load_graph(&command.original, options.clone())?;
    let shuffled = load_graph(&command.shuffled, options)?;
    let similarity = edge_similarity(&original.graph, &shuffled.graph);
    info!(
        similarity = similarity.map(|value| value.ratio()),
        "compare command completed"
    );
    Ok(CompareSummary {
        original: command.original.clone(),
        shuffled: command.shuffled.clone(),
        original_graph: original.summary,
        shuffled_graph: shuffled.summary,
        similarity,
    })
}

pub(super) struct LoadedGraph {
    pub(super) graph: Graph,
    pub(super) summary: GraphSummary,
}

#[instrument(
    name = "cli.load_graph",
    err,
    skip(path, options),
    fields(path = %path.display()),
)]
pub(super) fn load_graph(path: &Path, options: EdgeListOptions) -> Result<LoadedGraph, CliError> {
    let reader = EdgeListReader::new(options)?;
    let loaded = reader.read_path(path)?;
    if loaded.stats.truncated {
        warn!(
            rows = loaded.stats.rows_read,
            "row limit reached, remaining input ignored"
        );
    }
    let mut builder = GraphBuilder::new(derive_graph_name(path));
    builder.extend(loaded.edges);
    let (graph, build) = builder.finish();
    let summary = GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        load: loaded.stats,
        build,
    };
    Ok(LoadedGraph { graph, summary })
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}
