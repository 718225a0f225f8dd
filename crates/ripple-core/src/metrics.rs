//! Per-depth coverage metrics and multi-run summaries.

use crate::Reachability;
use serde::{Deserialize, Serialize};

/// One metrics record per explored depth: how much of the network the
/// origin reaches within that many hops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthMetric {
    /// Degrees of separation.
    pub depth: u32,
    /// Nodes at distance <= depth.
    pub people_reached: usize,
    /// `people_reached` over the full graph size, in [0, 1].
    pub fraction_of_graph: f64,
}

/// Compute the metrics stream for a run, one record per depth from 0 to
/// the stop depth.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn depth_metrics(reach: &Reachability, graph_node_count: usize) -> Vec<DepthMetric> {
    let mut records = Vec::with_capacity(reach.layers().len());
    let mut reached = 0;

    for (d, layer) in reach.layers().iter().enumerate() {
        reached += layer.len();
        let fraction = if graph_node_count > 0 {
            reached as f64 / graph_node_count as f64
        } else {
            0.0
        };
        records.push(DepthMetric {
            depth: d as u32,
            people_reached: reached,
            fraction_of_graph: fraction,
        });
    }

    records
}

/// Aggregated coverage at one depth across several runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthSummary {
    /// Degrees of separation.
    pub depth: u32,
    /// Number of runs that reached this depth.
    pub runs: usize,
    /// Mean fraction of the graph reached.
    pub mean_fraction: f64,
    /// Standard deviation of the fraction across runs.
    pub sd_fraction: f64,
}

/// Summarize several runs' metrics streams per depth.
///
/// Runs may stop at different depths; each depth is averaged over the
/// runs that reached it. Returns an empty vec for empty input.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn summarize_runs(runs: &[Vec<DepthMetric>]) -> Vec<DepthSummary> {
    let max_depths = runs.iter().map(Vec::len).max().unwrap_or(0);
    let mut summaries = Vec::with_capacity(max_depths);

    for d in 0..max_depths {
        let fractions: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.get(d))
            .map(|m| m.fraction_of_graph)
            .collect();

        let n = fractions.len();
        let mean = fractions.iter().sum::<f64>() / n as f64;
        let variance = fractions
            .iter()
            .map(|f| (f - mean).powi(2))
            .sum::<f64>()
            / n as f64;

        summaries.push(DepthSummary {
            depth: d as u32,
            runs: n,
            mean_fraction: mean,
            sd_fraction: variance.sqrt(),
        });
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_layers, SocialGraph};

    fn star_graph() -> SocialGraph {
        let mut g = SocialGraph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        g.add_edge(1, 4);
        g
    }

    #[test]
    fn test_star_metrics() {
        let g = star_graph();
        let reach = compute_layers(&g, 0, 3).unwrap();
        let metrics = depth_metrics(&reach, g.node_count());

        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].people_reached, 1);
        assert!((metrics[0].fraction_of_graph - 0.2).abs() < 1e-9);
        assert_eq!(metrics[1].people_reached, 4);
        assert!((metrics[1].fraction_of_graph - 0.8).abs() < 1e-9);
        assert_eq!(metrics[2].people_reached, 5);
        assert!((metrics[2].fraction_of_graph - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_monotone() {
        let g = star_graph();
        let reach = compute_layers(&g, 0, 3).unwrap();
        let metrics = depth_metrics(&reach, g.node_count());

        for pair in metrics.windows(2) {
            assert!(pair[1].people_reached > pair[0].people_reached);
            assert!(pair[1].fraction_of_graph >= pair[0].fraction_of_graph);
        }
    }

    #[test]
    fn test_summarize_runs() {
        let run_a = vec![
            DepthMetric { depth: 0, people_reached: 1, fraction_of_graph: 0.2 },
            DepthMetric { depth: 1, people_reached: 4, fraction_of_graph: 0.8 },
        ];
        let run_b = vec![
            DepthMetric { depth: 0, people_reached: 1, fraction_of_graph: 0.2 },
            DepthMetric { depth: 1, people_reached: 2, fraction_of_graph: 0.4 },
            DepthMetric { depth: 2, people_reached: 5, fraction_of_graph: 1.0 },
        ];

        let summary = summarize_runs(&[run_a, run_b]);
        assert_eq!(summary.len(), 3);

        assert_eq!(summary[0].runs, 2);
        assert!((summary[0].mean_fraction - 0.2).abs() < 1e-9);
        assert!(summary[0].sd_fraction.abs() < 1e-9);

        assert!((summary[1].mean_fraction - 0.6).abs() < 1e-9);
        assert!(summary[1].sd_fraction > 0.0);

        assert_eq!(summary[2].runs, 1, "only one run reached depth 2");
        assert!((summary[2].mean_fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize_runs(&[]).is_empty());
    }
}
