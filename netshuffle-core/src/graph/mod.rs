//! Undirected simple graph model used by the shuffler.
//!
//! A [`Graph`] owns a labelled node table, the edge list in insertion order,
//! and a hash set mirroring the edge list for constant-time membership checks.
//! The node table is immutable once built and is shared between a graph and
//! its shuffled copies, so node identifiers remain comparable across them.

mod builder;

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

pub use builder::{BuildStats, GraphBuilder, RawEdge};

/// Dense identifier of a node inside a [`Graph`]'s node table.
///
/// # Examples
/// ```
/// use netshuffle_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Unordered pair of distinct nodes.
///
/// The endpoints are stored canonically (lower id first) so `Edge::new(a, b)`
/// and `Edge::new(b, a)` compare and hash equal.
///
/// # Examples
/// ```
/// use netshuffle_core::{Edge, NodeId};
///
/// let forward = Edge::new(NodeId::new(1), NodeId::new(4)).expect("distinct endpoints");
/// let reverse = Edge::new(NodeId::new(4), NodeId::new(1)).expect("distinct endpoints");
/// assert_eq!(forward, reverse);
/// assert!(Edge::new(NodeId::new(2), NodeId::new(2)).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: NodeId,
    high: NodeId,
}

impl Edge {
    /// Builds an edge between `u` and `v`, returning `None` for a self-loop.
    #[must_use]
    pub fn new(u: NodeId, v: NodeId) -> Option<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Some(Self { low: u, high: v }),
            std::cmp::Ordering::Greater => Some(Self { low: v, high: u }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Endpoint with the lower identifier.
    #[must_use]
    pub const fn low(self) -> NodeId {
        self.low
    }

    /// Endpoint with the higher identifier.
    #[must_use]
    pub const fn high(self) -> NodeId {
        self.high
    }

    /// Both endpoints in canonical order.
    #[must_use]
    pub const fn endpoints(self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }

    /// Returns whether `node` is one of the endpoints.
    #[must_use]
    pub fn touches(self, node: NodeId) -> bool {
        self.low == node || self.high == node
    }
}

#[derive(Debug, Default)]
pub(crate) struct NodeTable {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
}

impl NodeTable {
    pub(crate) fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId::new(self.labels.len());
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        id
    }

    pub(crate) fn lookup(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.get()).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}

/// Undirected graph without self-loops or parallel edges.
///
/// Cloning a graph copies the edge list and edge set; the node table is
/// shared because it never changes after construction.
///
/// # Examples
/// ```
/// use netshuffle_core::{Graph, RawEdge};
///
/// let graph = Graph::from_raw_edges(
///     "demo",
///     [RawEdge::new("A", "B"), RawEdge::new("B", "A"), RawEdge::new("C", "C")],
/// );
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.has_edge_between("B", "A"));
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    name: Arc<str>,
    nodes: Arc<NodeTable>,
    edges: Vec<Edge>,
    edge_set: HashSet<Edge>,
}

impl Graph {
    pub(crate) fn from_parts(
        name: Arc<str>,
        nodes: NodeTable,
        edges: Vec<Edge>,
        edge_set: HashSet<Edge>,
    ) -> Self {
        Self {
            name,
            nodes: Arc::new(nodes),
            edges,
            edge_set,
        }
    }

    /// Builds a graph from raw label pairs, discarding the build statistics.
    ///
    /// Use [`GraphBuilder`] directly when the number of dropped self-loops and
    /// duplicates matters.
    #[must_use]
    pub fn from_raw_edges<I>(name: impl Into<Arc<str>>, edges: I) -> Self
    where
        I: IntoIterator<Item = RawEdge>,
    {
        let mut builder = GraphBuilder::new(name);
        builder.extend(edges);
        builder.finish().0
    }

    /// Name of the data source the graph was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes; every node is an endpoint of at least one edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in slot order. Swaps rewrite slots in place, so the order of
    /// untouched edges is stable across a shuffle.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns whether `edge` is present.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edge_set.contains(&edge)
    }

    /// Returns whether an edge joins the nodes labelled `u` and `v`.
    #[must_use]
    pub fn has_edge_between(&self, u: &str, v: &str) -> bool {
        let (Some(u), Some(v)) = (self.nodes.lookup(u), self.nodes.lookup(v)) else {
            return false;
        };
        Edge::new(u, v).is_some_and(|edge| self.contains_edge(edge))
    }

    /// Looks up the identifier assigned to `label`.
    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.nodes.lookup(label)
    }

    /// Returns the label of `node`, if it belongs to this graph.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.label(node)
    }

    /// Iterates over node labels in identifier order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.labels.iter().map(String::as_str)
    }

    /// Iterates over edges as `(label, label)` pairs in slot order.
    pub fn labelled_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().filter_map(|edge| {
            let low = self.nodes.label(edge.low())?;
            let high = self.nodes.label(edge.high())?;
            Some((low, high))
        })
    }

    /// Degree of every node, indexed by [`NodeId::get`].
    ///
    /// # Examples
    /// ```
    /// use netshuffle_core::{Graph, RawEdge};
    ///
    /// let graph = Graph::from_raw_edges("path", [RawEdge::new("a", "b"), RawEdge::new("b", "c")]);
    /// assert_eq!(graph.degrees(), vec![1, 2, 1]);
    /// ```
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0_usize; self.node_count()];
        for edge in &self.edges {
            for node in [edge.low(), edge.high()] {
                if let Some(slot) = degrees.get_mut(node.get()) {
                    *slot += 1;
                }
            }
        }
        degrees
    }

    /// Degree of a single node; `None` when the node is unknown.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        (node.get() < self.node_count())
            .then(|| self.edges.iter().filter(|edge| edge.touches(node)).count())
    }

    /// Returns whether both graphs were derived from the same node table, in
    /// which case their [`NodeId`]s are directly comparable.
    #[must_use]
    pub fn shares_nodes_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Replaces the edges in slots `first` and `second` with the given
    /// replacements, keeping the edge list and edge set consistent.
    ///
    /// Callers guarantee both slots exist, the slots differ, and neither
    /// replacement is already present.
    pub(crate) fn replace_pair(
        &mut self,
        (first, first_new): (usize, Edge),
        (second, second_new): (usize, Edge),
    ) {
        let (Some(&first_old), Some(&second_old)) = (self.edges.get(first), self.edges.get(second))
        else {
            return;
        };
        self.edge_set.remove(&first_old);
        self.edge_set.remove(&second_old);
        self.edge_set.insert(first_new);
        self.edge_set.insert(second_new);
        if let Some(slot) = self.edges.get_mut(first) {
            *slot = first_new;
        }
        if let Some(slot) = self.edges.get_mut(second) {
            *slot = second_new;
        }
    }
}

#[cfg(test)]
mod tests;
