//! Construction of [`Graph`] values from raw label pairs.

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, instrument};

use super::{Edge, Graph, NodeTable};

/// Endpoint labels as read from an edge list, before deduplication.
///
/// # Examples
/// ```
/// use netshuffle_core::RawEdge;
///
/// let edge = RawEdge::new("TP53", "MDM2");
/// assert_eq!(edge.source(), "TP53");
/// assert_eq!(edge.target(), "MDM2");
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawEdge {
    source: String,
    target: String,
}

impl RawEdge {
    /// Creates a raw edge from two labels.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Label read from the source column.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Label read from the target column.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns whether both endpoints carry the same label.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Counts of raw edges discarded while building a graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Raw edges offered to the builder.
    pub offered: usize,
    /// Raw edges dropped because both endpoints were equal.
    pub self_loops: usize,
    /// Raw edges dropped because the unordered pair was already present.
    pub duplicates: usize,
}

/// Incrementally assembles a [`Graph`], dropping self-loops and parallel
/// edges. Node identifiers are assigned in first-seen order.
///
/// # Examples
/// ```
/// use netshuffle_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new("demo");
/// assert!(builder.add_edge("A", "B"));
/// assert!(!builder.add_edge("B", "A"));
/// assert!(!builder.add_edge("C", "C"));
/// let (graph, stats) = builder.finish();
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!((stats.duplicates, stats.self_loops), (1, 1));
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    name: Arc<str>,
    nodes: NodeTable,
    edges: Vec<Edge>,
    seen: HashSet<Edge>,
    stats: BuildStats,
}

impl GraphBuilder {
    /// Creates an empty builder for a graph called `name`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            nodes: NodeTable::default(),
            edges: Vec::new(),
            seen: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Offers one edge to the builder, returning whether it was kept.
    ///
    /// Self-loops never introduce their endpoint as a node, so the node set
    /// stays equal to the set of edge endpoints.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        self.stats.offered += 1;
        if source == target {
            self.stats.self_loops += 1;
            return false;
        }
        let u = self.nodes.intern(source);
        let v = self.nodes.intern(target);
        let Some(edge) = Edge::new(u, v) else {
            self.stats.self_loops += 1;
            return false;
        };
        if !self.seen.insert(edge) {
            self.stats.duplicates += 1;
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Offers every edge yielded by `edges`.
    pub fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = RawEdge>,
    {
        for edge in edges {
            self.add_edge(edge.source(), edge.target());
        }
    }

    /// Statistics gathered so far.
    #[must_use]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Consumes the builder and returns the graph with its build statistics.
    #[instrument(
        name = "core.build_graph",
        skip(self),
        fields(graph = %self.name, offered = self.stats.offered),
    )]
    pub fn finish(self) -> (Graph, BuildStats) {
        let Self {
            name,
            nodes,
            edges,
            seen,
            stats,
        } = self;
        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            self_loops = stats.self_loops,
            duplicates = stats.duplicates,
            "graph built"
        );
        (Graph::from_parts(name, nodes, edges, seen), stats)
    }
}
