//! Load, shuffle and write an edge list end to end, then check the written
//! file against the shuffled graph and the input by label.

use std::collections::{BTreeSet, HashMap};

use netshuffle_core::{GraphBuilder, ShufflerBuilder, edge_similarity};
use netshuffle_providers_edgelist::{
    EdgeListOptions, EdgeListReader, EdgeListWriter, WriterOptions, shuffled_output_path,
};
use netshuffle_test_support::fixtures::{temp_dir, write_file};
use rstest::rstest;

fn degrees_by_label(graph: &netshuffle_core::Graph) -> HashMap<String, usize> {
    let mut degrees = HashMap::new();
    for (source, target) in graph.labelled_edges() {
        *degrees.entry(source.to_owned()).or_insert(0) += 1;
        *degrees.entry(target.to_owned()).or_insert(0) += 1;
    }
    degrees
}

fn label_pairs(graph: &netshuffle_core::Graph) -> BTreeSet<(String, String)> {
    graph
        .labelled_edges()
        .map(|(source, target)| {
            let (low, high) = if source <= target {
                (source, target)
            } else {
                (target, source)
            };
            (low.to_owned(), high.to_owned())
        })
        .collect()
}

fn grid_edge_list(side: usize) -> String {
    let mut text = String::from("gene_a\tgene_b\n");
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col + 1;
            if col + 1 < side {
                text.push_str(&format!("{id}\t{}\n", id + 1));
            }
            if row + 1 < side {
                text.push_str(&format!("{id}\t{}\n", id + side));
            }
        }
    }
    text
}

#[rstest]
fn written_shuffle_reloads_as_the_same_edge_set() {
    let dir = temp_dir();
    let input = write_file(&dir, "grid.txt", &grid_edge_list(8)).expect("fixture must be written");
    let reader = EdgeListReader::new(EdgeListOptions::new()).expect("default options are valid");
    let loaded = reader.read_path(&input).expect("fixture must load");

    let mut builder = GraphBuilder::new("grid");
    builder.extend(loaded.edges);
    let (original, _) = builder.finish();
    let outcome = ShufflerBuilder::new()
        .with_seed(2024)
        .build()
        .expect("defaults are valid")
        .shuffle(&original);

    let output = shuffled_output_path(&input, dir.path(), Some("t1"));
    assert!(output.ends_with("grid_shuffled_t1.txt"));
    EdgeListWriter::new(WriterOptions::new())
        .expect("default writer options are valid")
        .write_atomic(outcome.graph(), &output)
        .expect("atomic write succeeds");

    let reloaded_edges = reader.read_path(&output).expect("output must load");
    let mut builder = GraphBuilder::new("reloaded");
    builder.extend(reloaded_edges.edges);
    let (reloaded, stats) = builder.finish();

    assert_eq!(stats.self_loops, 0);
    assert_eq!(stats.duplicates, 0);
    assert_eq!(reloaded.edge_count(), original.edge_count());
    assert_eq!(degrees_by_label(&reloaded), degrees_by_label(&original));
    assert_eq!(label_pairs(&reloaded), label_pairs(outcome.graph()));

    let similarity = edge_similarity(&original, &reloaded).expect("grid has edges");
    assert!(similarity.ratio() < 1.0, "a full shuffle must move some edges");
}
