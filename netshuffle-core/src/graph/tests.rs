//! Unit tests for graph construction and queries.

use rstest::rstest;

use super::{Edge, Graph, GraphBuilder, NodeId, RawEdge};
use crate::test_utils::graph_from_pairs;

#[rstest]
fn builder_assigns_ids_in_first_seen_order() {
    let graph = graph_from_pairs("order", &[("b", "a"), ("c", "b")]);
    let labels: Vec<&str> = graph.labels().collect();
    assert_eq!(labels, ["b", "a", "c"]);
    assert_eq!(graph.node_id("c"), Some(NodeId::new(2)));
    assert_eq!(graph.label(NodeId::new(1)), Some("a"));
    assert_eq!(graph.label(NodeId::new(3)), None);
}

#[rstest]
#[case::reversed_duplicate(&[("a", "b"), ("b", "a")], 1, 0, 1)]
#[case::exact_duplicate(&[("a", "b"), ("a", "b"), ("a", "b")], 1, 0, 2)]
#[case::self_loop(&[("a", "a"), ("a", "b")], 1, 1, 0)]
#[case::mixed(&[("a", "b"), ("c", "c"), ("b", "a"), ("b", "c")], 2, 1, 1)]
fn builder_drops_self_loops_and_duplicates(
    #[case] pairs: &[(&str, &str)],
    #[case] edges: usize,
    #[case] self_loops: usize,
    #[case] duplicates: usize,
) {
    let mut builder = GraphBuilder::new("demo");
    builder.extend(pairs.iter().map(|&(u, v)| RawEdge::new(u, v)));
    let (graph, stats) = builder.finish();
    assert_eq!(graph.edge_count(), edges);
    assert_eq!(stats.offered, pairs.len());
    assert_eq!(stats.self_loops, self_loops);
    assert_eq!(stats.duplicates, duplicates);
}

#[rstest]
fn self_loop_only_nodes_are_not_added() {
    let graph = graph_from_pairs("loops", &[("solo", "solo"), ("a", "b")]);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node_id("solo"), None);
}

#[rstest]
fn empty_input_builds_empty_graph() {
    let graph = Graph::from_raw_edges("empty", Vec::<RawEdge>::new());
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert!(graph.degrees().is_empty());
    assert_eq!(graph.name(), "empty");
}

#[rstest]
fn degrees_count_incident_edges() {
    let graph = graph_from_pairs("star", &[("hub", "a"), ("hub", "b"), ("hub", "c")]);
    assert_eq!(graph.degrees(), vec![3, 1, 1, 1]);
    let hub = graph.node_id("hub").expect("hub must exist");
    assert_eq!(graph.degree(hub), Some(3));
    assert_eq!(graph.degree(NodeId::new(42)), None);
}

#[rstest]
fn labelled_edges_follow_slot_order() {
    let graph = graph_from_pairs("path", &[("x", "y"), ("z", "y")]);
    let pairs: Vec<(&str, &str)> = graph.labelled_edges().collect();
    assert_eq!(pairs, [("x", "y"), ("y", "z")]);
}

#[rstest]
fn replace_pair_updates_list_and_set() {
    let mut graph = graph_from_pairs("pair", &[("a", "b"), ("c", "d")]);
    let id = |label: &str| graph.node_id(label).expect("label must exist");
    let (a, b, c, d) = (id("a"), id("b"), id("c"), id("d"));
    let ad = Edge::new(a, d).expect("distinct");
    let cb = Edge::new(c, b).expect("distinct");
    graph.replace_pair((0, ad), (1, cb));
    assert_eq!(graph.edges(), [ad, cb]);
    assert!(graph.contains_edge(ad));
    assert!(graph.contains_edge(cb));
    assert!(!graph.has_edge_between("a", "b"));
    assert!(!graph.has_edge_between("c", "d"));
}

#[rstest]
fn clones_share_node_table_but_not_edges() {
    let original = graph_from_pairs("pair", &[("a", "b"), ("c", "d")]);
    let mut copy = original.clone();
    let id = |label: &str| original.node_id(label).expect("label must exist");
    let ac = Edge::new(id("a"), id("c")).expect("distinct");
    let bd = Edge::new(id("b"), id("d")).expect("distinct");
    copy.replace_pair((0, ac), (1, bd));
    assert!(original.shares_nodes_with(&copy));
    assert!(original.has_edge_between("a", "b"));
    assert!(!copy.has_edge_between("a", "b"));
}

#[rstest]
fn unknown_labels_have_no_edges() {
    let graph = graph_from_pairs("pair", &[("a", "b")]);
    assert!(!graph.has_edge_between("a", "zzz"));
    assert!(!graph.has_edge_between("a", "a"));
}
