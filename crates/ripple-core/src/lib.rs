// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_const_for_fn)]

//! Degrees-of-separation exploration in static social graphs.
//!
//! Starting from an origin node, the engine computes breadth-first
//! reachability layers up to a depth cutoff and derives a size-bounded
//! subgraph suitable for progressive visualization:
//!
//! - [`SocialGraph`] - immutable undirected graph, built once and
//!   shared read-only across runs
//! - [`compute_layers`] - shortest-path layers from an origin
//! - [`select_nodes`] / [`induce_subgraph`] - deterministic size-capped
//!   sampling and the induced [`Subgraph`]
//! - [`FrameIndex`] - O(1) per-depth discovered/frontier/visible-edge
//!   queries for replayable rendering
//! - [`depth_metrics`] - per-depth coverage records
//! - [`explore`] / [`explore_many`] - one-call runs, optionally in
//!   parallel over the shared graph
//!
//! The crate computes no layout, draws nothing, and persists nothing;
//! renderers and metric recorders consume its outputs.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{explore, RunConfig, SocialGraph};
//!
//! let mut g = SocialGraph::new();
//! g.add_edge(0, 1);
//! g.add_edge(0, 2);
//! g.add_edge(1, 3);
//!
//! let run = explore(&g, 0, &RunConfig::default()).unwrap();
//! assert_eq!(run.reachability.layer(1), &[1, 2]);
//! assert!(run.frames.frontier(2).contains(&3));
//! ```

pub mod algo;
mod error;
mod graph;
mod metrics;
mod run;

pub use algo::frames::{FrameIndex, FrameState};
pub use algo::reachability::{compute_layers, Reachability};
pub use algo::sampling::{induce_subgraph, select_nodes, Subgraph};
pub use error::{Error, Result};
pub use graph::{GraphStats, NodeId, SocialGraph};
pub use metrics::{depth_metrics, summarize_runs, DepthMetric, DepthSummary};
pub use run::{choose_origin, explore, explore_many, Exploration, RunConfig};

// Re-export petgraph for advanced graph operations
pub use petgraph;
