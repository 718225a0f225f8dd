//! Integration tests for the exploration pipeline.
//!
//! These tests verify that the engine, sampler, frame index, and
//! metrics compose correctly on realistic graph structures.

use ripple_core::{
    compute_layers, explore, explore_many, summarize_runs, FrameIndex, RunConfig, SocialGraph,
};

/// Star with center 0 linked to 1, 2, 3, plus 1 linked to 4.
///
/// ```text
///     2
///     |
/// 3 - 0 - 1 - 4
/// ```
fn star_graph() -> SocialGraph {
    let mut g = SocialGraph::new();
    g.add_edge(0, 1);
    g.add_edge(0, 2);
    g.add_edge(0, 3);
    g.add_edge(1, 4);
    g
}

/// Chain 0 - 1 - ... - n.
fn chain_graph(length: u64) -> SocialGraph {
    let mut g = SocialGraph::new();
    for i in 0..length {
        g.add_edge(i, i + 1);
    }
    g
}

/// Complete graph over n nodes.
fn complete_graph(n: u64) -> SocialGraph {
    let mut g = SocialGraph::new();
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(i, j);
        }
    }
    g
}

#[test]
fn test_star_example_end_to_end() {
    let g = star_graph();
    let config = RunConfig {
        origin: Some(0),
        max_depth: 3,
        max_nodes_in_view: 3,
    };

    let run = explore(&g, 0, &config).unwrap();

    // Layers: {0}, {1,2,3}, {4}; empty frontier at depth 3 stops the run.
    assert_eq!(run.reachability.layer(0), &[0]);
    assert_eq!(run.reachability.layer(1), &[1, 2, 3]);
    assert_eq!(run.reachability.layer(2), &[4]);
    assert!(run.reachability.exhausted());
    assert_eq!(run.frames.last_active_depth(), 2);

    // Metrics: 1 of 5 (20%), 4 of 5 (80%), 5 of 5 (100%).
    let fractions: Vec<f64> = run.metrics.iter().map(|m| m.fraction_of_graph).collect();
    assert_eq!(run.metrics.len(), 3);
    assert!((fractions[0] - 0.2).abs() < 1e-9);
    assert!((fractions[1] - 0.8).abs() < 1e-9);
    assert!((fractions[2] - 1.0).abs() < 1e-9);

    // cap=3: origin, then node 1 by the degree tie-break, then node 2
    // by id order among the remaining distance-1 peers.
    assert_eq!(run.subgraph.nodes, vec![0, 1, 2]);
}

#[test]
fn test_chain_one_node_per_layer() {
    let g = chain_graph(10);
    let reach = compute_layers(&g, 0, 6).unwrap();

    assert_eq!(reach.layers().len(), 7, "cutoff at depth 6");
    for (d, layer) in reach.layers().iter().enumerate() {
        assert_eq!(layer, &[d as u64]);
    }
    assert!(!reach.exhausted(), "chain continues past the cutoff");
    assert_eq!(reach.distance(10), None);
}

#[test]
fn test_complete_graph_two_layers() {
    let g = complete_graph(6);
    let reach = compute_layers(&g, 0, 6).unwrap();

    assert_eq!(reach.layers().len(), 2);
    assert_eq!(reach.layer(1).len(), 5);
    assert!(reach.exhausted());
}

#[test]
fn test_two_components_explored_separately() {
    let mut g = star_graph();
    g.add_edge(100, 101);
    g.add_edge(101, 102);

    let from_star = explore(&g, 0, &RunConfig::default()).unwrap();
    assert_eq!(from_star.reachability.reached_count(), 5);
    assert!(from_star.reachability.distance(100).is_none());

    let from_other = explore(&g, 100, &RunConfig::default()).unwrap();
    assert_eq!(from_other.reachability.reached_count(), 3);
    assert!(from_other.reachability.distance(0).is_none());
}

#[test]
fn test_shared_graph_parallel_runs() {
    let g = complete_graph(12);
    let config = RunConfig::default();

    let runs = explore_many(&g, &config, 8, 42).unwrap();
    assert_eq!(runs.len(), 8);

    // Complete graph: every origin reaches everyone by depth 1.
    for run in &runs {
        assert_eq!(run.reachability.reached_count(), 12);
        assert_eq!(run.reachability.last_depth(), 1);
    }

    let streams: Vec<_> = runs.iter().map(|r| r.metrics.clone()).collect();
    let summary = summarize_runs(&streams);
    assert_eq!(summary.len(), 2);
    assert!((summary[1].mean_fraction - 1.0).abs() < 1e-9);
    assert!(summary[1].sd_fraction.abs() < 1e-9);
}

#[test]
fn test_frame_states_serialize() {
    let g = star_graph();
    let run = explore(&g, 0, &RunConfig::default()).unwrap();

    let json = serde_json::to_string(&run.frames.frames()).unwrap();
    assert!(json.contains("\"depth\":0"));
    assert!(json.contains("\"frontier\""));

    let sub_json = serde_json::to_string(&run.subgraph).unwrap();
    let recovered: ripple_core::Subgraph = serde_json::from_str(&sub_json).unwrap();
    assert_eq!(recovered.node_count(), run.subgraph.node_count());
    assert_eq!(recovered.edges, run.subgraph.edges);
}

#[test]
fn test_frame_index_random_order_queries() {
    let g = chain_graph(20);
    let run = explore(&g, 0, &RunConfig::default()).unwrap();
    let index: &FrameIndex = &run.frames;

    // Query depths out of order; answers must match in-order queries.
    let out_of_order: Vec<usize> = [5u32, 0, 6, 3, 6, 1, 4, 2]
        .iter()
        .map(|&t| index.discovered(t).len())
        .collect();
    assert_eq!(out_of_order, vec![6, 1, 7, 4, 7, 2, 5, 3]);
}
