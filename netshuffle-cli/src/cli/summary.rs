//! Run summaries and their stdout rendering.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use netshuffle_core::{BuildStats, EdgeSimilarity, ShuffleReport};
use netshuffle_providers_edgelist::LoadStats;

use super::commands::ShuffleCommand;

/// Size and load diagnostics of one input graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    /// Nodes in the built graph.
    pub nodes: usize,
    /// Edges in the built graph.
    pub edges: usize,
    /// Row accounting from the loader.
    pub load: LoadStats,
    /// Raw edges dropped by the graph builder.
    pub build: BuildStats,
}

/// Outcome of the `shuffle` command.
#[derive(Debug, Clone)]
pub struct ShuffleSummary {
    /// Edge list that was shuffled.
    pub input: PathBuf,
    /// File the shuffled edge list was written to.
    pub output: PathBuf,
    /// Arguments the run was invoked with.
    pub arguments: ShuffleCommand,
    /// Diagnostics for the input graph.
    pub graph: GraphSummary,
    /// Shuffle diagnostics, including the seed used.
    pub report: ShuffleReport,
    /// Fraction of input edges present in the output.
    pub similarity: Option<EdgeSimilarity>,
}

/// Outcome of the `compare` command.
#[derive(Debug, Clone)]
pub struct CompareSummary {
    /// Reference edge list.
    pub original: PathBuf,
    /// Edge list compared against the reference.
    pub shuffled: PathBuf,
    /// Diagnostics for the reference graph.
    pub original_graph: GraphSummary,
    /// Diagnostics for the compared graph.
    pub shuffled_graph: GraphSummary,
    /// Fraction of reference edges present in the compared graph.
    pub similarity: Option<EdgeSimilarity>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `shuffle`.
    Shuffle(ShuffleSummary),
    /// Result of `compare`.
    Compare(CompareSummary),
}

impl ExecutionSummary {
    /// Whether the summary belongs on stdout: always for `compare`, and for
    /// `shuffle` only when `--verbose` was given.
    #[must_use]
    pub const fn wants_stdout(&self) -> bool {
        match self {
            Self::Shuffle(summary) => summary.arguments.verbose,
            Self::Compare(_) => true,
        }
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Shuffle(shuffle) => render_shuffle(shuffle, &mut writer),
        ExecutionSummary::Compare(compare) => render_compare(compare, &mut writer),
    }
}

fn render_shuffle(summary: &ShuffleSummary, writer: &mut impl Write) -> io::Result<()> {
    let report = &summary.report;
    writeln!(writer, "input: {}", summary.input.display())?;
    writeln!(writer, "output: {}", summary.output.display())?;
    render_arguments(writer, &summary.arguments)?;
    writeln!(writer, "seed: {}", report.seed)?;
    render_graph(writer, "graph", &summary.graph)?;
    writeln!(
        writer,
        "swaps: {} of {} requested ({} attempts, limit {})",
        report.performed_swaps, report.requested_swaps, report.attempts, report.max_attempts
    )?;
    writeln!(writer, "status: {}", report.status)?;
    render_similarity(writer, summary.similarity)
}

fn render_arguments(writer: &mut impl Write, arguments: &ShuffleCommand) -> io::Result<()> {
    let loader = &arguments.loader;
    let (source, target) = loader.columns();
    writeln!(writer, "swap multiplier: {}", arguments.swaps)?;
    writeln!(
        writer,
        "max attempts per swap: {}",
        arguments.max_attempts_per_swap
    )?;
    writeln!(writer, "test mode: {}", on_off(arguments.test_mode))?;
    writeln!(writer, "node columns: {source} {target}")?;
    writeln!(writer, "delimiter: {}", value_name(&loader.delimiter))?;
    writeln!(writer, "header: {}", on_off(!loader.no_header))?;
    writeln!(writer, "id type: {}", value_name(&loader.id_type))?;
    if let Some(suffix) = &arguments.suffix {
        writeln!(writer, "suffix: {suffix}")?;
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn value_name(value: &impl ValueEnum) -> String {
    value
        .to_possible_value()
        .map_or_else(String::new, |possible| possible.get_name().to_owned())
}

fn render_compare(summary: &CompareSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "original: {}", summary.original.display())?;
    writeln!(writer, "shuffled: {}", summary.shuffled.display())?;
    render_graph(writer, "original graph", &summary.original_graph)?;
    render_graph(writer, "shuffled graph", &summary.shuffled_graph)?;
    render_similarity(writer, summary.similarity)
}

fn render_graph(writer: &mut impl Write, label: &str, graph: &GraphSummary) -> io::Result<()> {
    writeln!(
        writer,
        "{label}: {} nodes, {} edges",
        graph.nodes, graph.edges
    )?;
    let truncated = if graph.load.truncated { ", truncated" } else { "" };
    writeln!(
        writer,
        "{label} rows: {} read, {} skipped{truncated}; {} self-loops and {} duplicates dropped",
        graph.load.rows_read, graph.load.rows_skipped, graph.build.self_loops, graph.build.duplicates
    )
}

fn render_similarity(writer: &mut impl Write, similarity: Option<EdgeSimilarity>) -> io::Result<()> {
    match similarity {
        Some(value) => writeln!(
            writer,
            "similarity: {:.4} ({} of {} edges shared)",
            value.ratio(),
            value.shared(),
            value.total()
        ),
        None => writeln!(writer, "similarity: undefined (original has no edges)"),
    }
}
