use crate::NodeId;
use thiserror::Error;

/// Errors that can occur in ripple-core.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Malformed edge-list line.
    #[error("Malformed edge at line {line}: {text:?}")]
    ParseEdge {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// Requested origin is not a node of the graph. Not auto-corrected;
    /// fallback/random-origin policy belongs to the caller.
    #[error("Origin {0} is not in the graph")]
    InvalidOrigin(NodeId),
    /// View cap must allow at least one node.
    #[error("Node cap must be at least 1, got {0}")]
    InvalidCap(usize),
    /// The graph has no nodes.
    #[error("Graph is empty")]
    EmptyGraph,
}

/// Result type alias for ripple-core.
pub type Result<T> = std::result::Result<T, Error>;
