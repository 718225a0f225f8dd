//! Size-bounded view sampling and induced subgraphs.
//!
//! Large ego networks cannot be drawn whole. [`select_nodes`] keeps the
//! view under a cap while preserving the growth narrative: nearer nodes
//! always win, and within a distance band hubs win because they carry
//! more structure per node drawn. [`induce_subgraph`] then fixes the
//! node and edge set once for the whole run; frames never recompute it.

use crate::{Error, NodeId, Reachability, Result, SocialGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Induced subgraph over the selected nodes, plus their distances.
///
/// Edges are the original graph edges with both endpoints selected,
/// normalized to `(min, max)` and sorted. Immutable once computed;
/// serializable for external renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subgraph {
    /// Selected nodes, in selection priority order.
    pub nodes: Vec<NodeId>,
    /// Induced edges, normalized and sorted.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Distance from the run's origin, restricted to selected nodes.
    pub distances: HashMap<NodeId, u32>,
}

impl Subgraph {
    /// Number of selected nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of induced edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Select at most `cap` reached nodes for the bounded view.
///
/// If everything fits, the whole reached set is returned exactly — no
/// truncation. Otherwise nodes are ranked by `(distance asc, degree
/// desc, id asc)` and the first `cap` are kept. The returned list is in
/// that rank order either way, so identical inputs always produce an
/// identical list.
///
/// # Errors
///
/// [`Error::InvalidCap`] if `cap < 1`; no empty view is silently
/// produced.
pub fn select_nodes(
    reach: &Reachability,
    graph: &SocialGraph,
    cap: usize,
) -> Result<Vec<NodeId>> {
    if cap < 1 {
        return Err(Error::InvalidCap(cap));
    }

    let mut ranked: Vec<NodeId> = reach.distances().keys().copied().collect();
    ranked.sort_unstable_by_key(|&u| {
        let d = reach.distance(u).unwrap_or(u32::MAX);
        (d, std::cmp::Reverse(graph.degree(u)), u)
    });

    ranked.truncate(cap);
    Ok(ranked)
}

/// Induce the subgraph of `graph` over `selected`, carrying the
/// distances of the selected nodes.
///
/// Computed once per run. O(sum of degrees of selected nodes).
pub fn induce_subgraph(
    graph: &SocialGraph,
    reach: &Reachability,
    selected: &[NodeId],
) -> Subgraph {
    let distances: HashMap<NodeId, u32> = selected
        .iter()
        .filter_map(|&u| reach.distance(u).map(|d| (u, d)))
        .collect();

    let mut edges = Vec::new();
    for &u in selected {
        for v in graph.neighbors(u) {
            // Normalized so each undirected edge is visited once.
            if u < v && distances.contains_key(&v) {
                edges.push((u, v));
            }
        }
    }
    edges.sort_unstable();

    Subgraph {
        nodes: selected.to_vec(),
        edges,
        distances,
    }
}
