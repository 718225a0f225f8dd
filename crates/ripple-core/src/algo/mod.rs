//! Algorithms for layered reachability exploration.

/// Layered BFS from an origin node.
pub mod reachability;

/// Bounded view sampling and induced subgraphs.
pub mod sampling;

/// Per-depth frame projections for renderers.
pub mod frames;
