//! Per-depth frame projections for progressive rendering.
//!
//! A renderer replaying the growth animation asks, for an arbitrary
//! depth `t`: who is discovered, who is the frontier, which edges are
//! visible? Recomputing the union of all prior layers on every frame is
//! O(depth) set work per query; [`FrameIndex`] instead accumulates the
//! prefixes once, in depth order, and answers every query by lookup.
//! Random-order and repeated queries are O(1) amortized.

use crate::{NodeId, Reachability, Subgraph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything a renderer needs to draw one depth step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameState {
    /// Depth of this frame.
    pub depth: u32,
    /// Nodes at distance <= depth, sorted by id.
    pub discovered: Vec<NodeId>,
    /// Nodes at exactly this depth, sorted by id.
    pub frontier: Vec<NodeId>,
    /// Bounded-subgraph edges with both endpoints discovered.
    pub visible_edges: Vec<(NodeId, NodeId)>,
}

/// Precomputed per-depth projections over a run's layers and bounded
/// subgraph.
///
/// Built once from a [`Reachability`] and its sampled [`Subgraph`];
/// queries past the last layer clamp: `discovered` stays at the full
/// reached set (monotone non-decreasing), `frontier` is empty
/// (exploration never resumes), `visible_edges` stays complete.
#[derive(Debug, Clone)]
pub struct FrameIndex {
    discovered: Vec<HashSet<NodeId>>,
    frontiers: Vec<HashSet<NodeId>>,
    visible_edges: Vec<Vec<(NodeId, NodeId)>>,
    empty: HashSet<NodeId>,
}

impl FrameIndex {
    /// Build the index. One pass over the layers, one over the subgraph
    /// edges.
    pub fn new(reach: &Reachability, subgraph: &Subgraph) -> Self {
        let layers = reach.layers();
        let depths = layers.len();

        // An edge becomes visible once its deeper endpoint is
        // discovered. Bucket subgraph edges by that depth.
        let mut edge_buckets: Vec<Vec<(NodeId, NodeId)>> = vec![Vec::new(); depths];
        for &(u, v) in &subgraph.edges {
            if let (Some(&du), Some(&dv)) =
                (subgraph.distances.get(&u), subgraph.distances.get(&v))
            {
                let at = du.max(dv) as usize;
                if at < depths {
                    edge_buckets[at].push((u, v));
                }
            }
        }

        let mut discovered = Vec::with_capacity(depths);
        let mut frontiers = Vec::with_capacity(depths);
        let mut visible_edges = Vec::with_capacity(depths);

        let mut acc: HashSet<NodeId> = HashSet::new();
        let mut acc_edges: Vec<(NodeId, NodeId)> = Vec::new();

        for (d, layer) in layers.iter().enumerate() {
            acc.extend(layer.iter().copied());
            discovered.push(acc.clone());
            frontiers.push(layer.iter().copied().collect());

            acc_edges.extend(edge_buckets[d].iter().copied());
            let mut frame_edges = acc_edges.clone();
            frame_edges.sort_unstable();
            visible_edges.push(frame_edges);
        }

        Self {
            discovered,
            frontiers,
            visible_edges,
            empty: HashSet::new(),
        }
    }

    /// Nodes at distance <= `t`. Clamps to the full reached set past
    /// the last layer.
    pub fn discovered(&self, t: u32) -> &HashSet<NodeId> {
        let i = (t as usize).min(self.discovered.len() - 1);
        &self.discovered[i]
    }

    /// Nodes at exactly distance `t`; empty past the last layer.
    pub fn frontier(&self, t: u32) -> &HashSet<NodeId> {
        self.frontiers.get(t as usize).unwrap_or(&self.empty)
    }

    /// Bounded-subgraph edges with both endpoints in `discovered(t)`.
    pub fn visible_edges(&self, t: u32) -> &[(NodeId, NodeId)] {
        let i = (t as usize).min(self.visible_edges.len() - 1);
        &self.visible_edges[i]
    }

    /// Depth of the last non-empty frontier.
    #[allow(clippy::cast_possible_truncation)]
    pub fn last_active_depth(&self) -> u32 {
        (self.frontiers.len() - 1) as u32
    }

    /// True when `t` is the last depth with a non-empty frontier; an
    /// external stepper uses this to stop advancing.
    pub fn is_last_active(&self, t: u32) -> bool {
        t == self.last_active_depth()
    }

    /// Number of frames (depth 0 through the last active depth).
    pub fn frame_count(&self) -> usize {
        self.frontiers.len()
    }

    /// Materialize the frame at depth `t` for export.
    pub fn frame(&self, t: u32) -> FrameState {
        let mut discovered: Vec<NodeId> = self.discovered(t).iter().copied().collect();
        discovered.sort_unstable();
        let mut frontier: Vec<NodeId> = self.frontier(t).iter().copied().collect();
        frontier.sort_unstable();

        FrameState {
            depth: t,
            discovered,
            frontier,
            visible_edges: self.visible_edges(t).to_vec(),
        }
    }

    /// All frames in depth order.
    pub fn frames(&self) -> Vec<FrameState> {
        (0..self.frame_count() as u32).map(|t| self.frame(t)).collect()
    }
}
