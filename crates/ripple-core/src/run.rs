//! Run orchestration: one call from graph to frames.
//!
//! A run is pure and synchronous: layered BFS, bounded sampling, frame
//! indexing, metrics. The graph is shared read-only, so independent
//! runs (different origins) parallelize with no synchronization;
//! [`explore_many`] does exactly that with per-run seeds.

use crate::{
    compute_layers, depth_metrics, induce_subgraph, select_nodes, DepthMetric, Error, FrameIndex,
    NodeId, Reachability, Result, SocialGraph, Subgraph,
};
use petgraph::graph::NodeIndex;
use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;

/// Configuration for one exploration run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Origin node; `None` means the caller picks one, e.g. via
    /// [`choose_origin`].
    pub origin: Option<NodeId>,
    /// Maximum degrees of separation to explore.
    pub max_depth: u32,
    /// Cap on nodes kept in the drawable subgraph.
    pub max_nodes_in_view: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            origin: None,
            max_depth: 6,
            max_nodes_in_view: 2000,
        }
    }
}

/// Everything a run produces. Owned by the run; the shared graph is
/// never part of it.
#[derive(Debug, Clone)]
pub struct Exploration {
    /// The origin this run started from.
    pub origin: NodeId,
    /// Distance map and layers.
    pub reachability: Reachability,
    /// One record per depth from 0 to the stop depth.
    pub metrics: Vec<DepthMetric>,
    /// The bounded, induced subgraph for rendering.
    pub subgraph: Subgraph,
    /// Per-depth frame projections over the subgraph.
    pub frames: FrameIndex,
}

/// Pick a uniformly random origin from the graph.
///
/// Origin selection is policy, not engine: the RNG is explicit so runs
/// are reproducible by construction.
///
/// # Errors
///
/// [`Error::EmptyGraph`] if the graph has no nodes.
pub fn choose_origin<R: Rng>(graph: &SocialGraph, rng: &mut R) -> Result<NodeId> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    // Indices are dense: the graph never removes nodes after build.
    let i = rng.gen_range(0..n);
    Ok(graph.as_petgraph()[NodeIndex::new(i)])
}

/// Run the full pipeline from one origin.
pub fn explore(graph: &SocialGraph, origin: NodeId, config: &RunConfig) -> Result<Exploration> {
    let reachability = compute_layers(graph, origin, config.max_depth)?;
    let metrics = depth_metrics(&reachability, graph.node_count());
    let selected = select_nodes(&reachability, graph, config.max_nodes_in_view)?;
    let subgraph = induce_subgraph(graph, &reachability, &selected);
    let frames = FrameIndex::new(&reachability, &subgraph);

    Ok(Exploration {
        origin,
        reachability,
        metrics,
        subgraph,
        frames,
    })
}

/// Run `runs` independent explorations in parallel over the shared
/// graph.
///
/// Run `i` draws its origin from `XorShiftRng::seed_from_u64(seed + i)`
/// unless `config.origin` pins one, so results are reproducible for a
/// given seed.
pub fn explore_many(
    graph: &SocialGraph,
    config: &RunConfig,
    runs: usize,
    seed: u64,
) -> Result<Vec<Exploration>> {
    (0..runs)
        .into_par_iter()
        .map(|i| {
            let origin = match config.origin {
                Some(id) => id,
                None => {
                    let mut rng = XorShiftRng::seed_from_u64(seed + i as u64);
                    choose_origin(graph, &mut rng)?
                }
            };
            explore(graph, origin, config)
        })
        .collect()
}
