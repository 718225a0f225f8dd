//! Layered breadth-first reachability from an origin node.
//!
//! # Intuition
//!
//! "Degrees of separation": layer d holds everyone exactly d hops from
//! the origin. Because the graph is unweighted, the layer index equals
//! the shortest-path hop count, and a node's layer is its *first*
//! discovery depth, never reassigned.
//!
//! The expansion stops the moment a frontier comes up empty, so the
//! layer list never carries trailing empty layers. Callers use
//! [`Reachability::exhausted`] as the "no more growth" signal.

use crate::{Error, NodeId, Result, SocialGraph};
use std::collections::HashMap;

/// Result of a layered BFS from one origin.
///
/// Layers partition the reached set: every reached node appears in
/// exactly one layer, at index equal to its shortest-path distance from
/// the origin. Nodes unreachable within the cutoff are simply absent.
#[derive(Debug, Clone)]
pub struct Reachability {
    origin: NodeId,
    distances: HashMap<NodeId, u32>,
    layers: Vec<Vec<NodeId>>,
    exhausted: bool,
}

impl Reachability {
    /// The origin node (distance 0).
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Shortest-path distance to a node, if reached within the cutoff.
    pub fn distance(&self, id: NodeId) -> Option<u32> {
        self.distances.get(&id).copied()
    }

    /// The full distance map.
    pub fn distances(&self) -> &HashMap<NodeId, u32> {
        &self.distances
    }

    /// All layers, index d = nodes at distance d. Each layer is sorted
    /// by id, so the whole value is deterministic.
    pub fn layers(&self) -> &[Vec<NodeId>] {
        &self.layers
    }

    /// Nodes at exactly distance `d`. Empty past the last layer.
    pub fn layer(&self, d: u32) -> &[NodeId] {
        self.layers
            .get(d as usize)
            .map_or(&[], |layer| layer.as_slice())
    }

    /// Depth of the last non-empty layer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn last_depth(&self) -> u32 {
        (self.layers.len() - 1) as u32
    }

    /// Total number of reached nodes.
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// True when expansion stopped because a frontier emptied at or
    /// before the depth cutoff: the graph component is fully explored
    /// and no deeper layer exists.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Compute shortest-path layers from `origin` up to `max_depth` hops.
///
/// Frontier-by-frontier BFS: at each depth the next frontier is every
/// neighbor of the current frontier not yet discovered. Unreachable
/// nodes are absent from the result; a disconnected graph is not an
/// error.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes.
/// - [`Error::InvalidOrigin`] if `origin` is not a node of the graph.
///
/// # Complexity
///
/// - Time: O(V + E) within the explored region
/// - Space: O(V)
///
/// # Example
///
/// ```
/// use ripple_core::{compute_layers, SocialGraph};
///
/// let mut g = SocialGraph::new();
/// g.add_edge(0, 1);
/// g.add_edge(0, 2);
/// g.add_edge(1, 3);
///
/// let reach = compute_layers(&g, 0, 6).unwrap();
/// assert_eq!(reach.layer(0), &[0]);
/// assert_eq!(reach.layer(1), &[1, 2]);
/// assert_eq!(reach.layer(2), &[3]);
/// assert!(reach.exhausted());
/// ```
pub fn compute_layers(graph: &SocialGraph, origin: NodeId, max_depth: u32) -> Result<Reachability> {
    if graph.node_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    let origin_idx = graph
        .get_node_index(origin)
        .ok_or(Error::InvalidOrigin(origin))?;

    let pg = graph.as_petgraph();
    let n = pg.node_count();

    // Dense distance array indexed by petgraph index: no hashing in the
    // hot loop. -1 means undiscovered.
    let mut dist = vec![-1_i64; n];
    dist[origin_idx.index()] = 0;

    let mut frontier = vec![origin_idx];
    let mut layers = vec![vec![origin]];
    let mut exhausted = false;

    for d in 1..=max_depth {
        let mut next = Vec::new();
        for &v in &frontier {
            for w in pg.neighbors(v) {
                if dist[w.index()] < 0 {
                    dist[w.index()] = i64::from(d);
                    next.push(w);
                }
            }
        }

        if next.is_empty() {
            exhausted = true;
            break;
        }

        let mut layer: Vec<NodeId> = next.iter().map(|&idx| pg[idx]).collect();
        layer.sort_unstable();
        layers.push(layer);
        frontier = next;
    }

    let mut distances = HashMap::with_capacity(layers.iter().map(Vec::len).sum());
    for (d, layer) in layers.iter().enumerate() {
        for &id in layer {
            distances.insert(id, d as u32);
        }
    }

    Ok(Reachability {
        origin,
        distances,
        layers,
        exhausted,
    })
}
