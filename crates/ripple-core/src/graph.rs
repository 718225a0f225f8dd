use crate::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Identifier of a person in the social graph.
///
/// SNAP edge lists use dense non-negative integers, so ids are plain
/// integers rather than interned strings.
pub type NodeId = u64;

/// An undirected social graph, immutable once built.
///
/// Uses petgraph's undirected graph internally for efficient traversal
/// and maintains an index for O(1) id lookup. The graph is built once by
/// the loader and then shared read-only across any number of runs.
///
/// # Example
///
/// ```rust
/// use ripple_core::SocialGraph;
///
/// let mut g = SocialGraph::new();
/// g.add_edge(0, 1);
/// g.add_edge(0, 2);
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.degree(0), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SocialGraph {
    /// The underlying undirected graph.
    graph: UnGraph<NodeId, ()>,

    /// Map from node id to petgraph index.
    node_index: HashMap<NodeId, NodeIndex>,
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            node_index: HashMap::new(),
        }
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            node_index: HashMap::with_capacity(nodes),
        }
    }

    /// Load from an edge-list file: one undirected edge per line, two
    /// whitespace-separated integer ids (the SNAP format).
    ///
    /// Blank lines and lines starting with `#` are skipped. Duplicate
    /// and self-referencing edges are tolerated and idempotent.
    pub fn from_edge_list_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_edge_list(BufReader::new(file))
    }

    /// Load from any edge-list reader. See [`Self::from_edge_list_file`].
    pub fn from_edge_list(reader: impl BufRead) -> Result<Self> {
        let mut g = Self::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let edge = match (parts.next(), parts.next()) {
                (Some(u), Some(v)) => u.parse::<NodeId>().ok().zip(v.parse::<NodeId>().ok()),
                _ => None,
            };

            match edge {
                Some((u, v)) => g.add_edge(u, v),
                None => {
                    return Err(Error::ParseEdge {
                        line: lineno + 1,
                        text: line.to_string(),
                    })
                }
            }
        }

        Ok(g)
    }

    /// Add an undirected edge, creating endpoints as needed.
    ///
    /// Adding the same edge twice has no effect. A self-loop registers
    /// the node but stores no edge: it cannot change distances, degrees
    /// between distinct people, or induced subgraphs.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        let ui = self.get_or_create_node(u);
        if u == v {
            return;
        }
        let vi = self.get_or_create_node(v);

        if self.graph.find_edge(ui, vi).is_none() {
            self.graph.add_edge(ui, vi, ());
        }
    }

    fn get_or_create_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }

    /// Whether the given id is a node of the graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Petgraph index for a node id.
    pub fn get_node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    /// Iterate over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().copied()
    }

    /// Neighbor ids of a node. O(d). Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        match self.node_index.get(&id) {
            Some(&idx) => self.graph.neighbors(idx).map(|n| self.graph[n]).collect(),
            None => vec![],
        }
    }

    /// Degree of a node. O(d). Zero for unknown ids.
    pub fn degree(&self, id: NodeId) -> usize {
        match self.node_index.get(&id) {
            Some(&idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    /// Iterate over all edges as `(u, v)` id pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        use petgraph::visit::EdgeRef;
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<NodeId, ()> {
        &self.graph
    }
}

/// Statistics about a social graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Average degree (2E / V for an undirected graph).
    pub avg_degree: f64,
}

impl SocialGraph {
    /// Compute statistics about the graph.
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> GraphStats {
        let node_count = self.node_count();
        let edge_count = self.edge_count();

        let avg_degree = if node_count > 0 {
            2.0 * edge_count as f64 / node_count as f64
        } else {
            0.0
        };

        GraphStats {
            node_count,
            edge_count,
            avg_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edges() {
        let mut g = SocialGraph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(0), 2);
        assert!(g.contains(2));
        assert!(!g.contains(7));
    }

    #[test]
    fn test_duplicate_edges_idempotent() {
        let mut g = SocialGraph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        g.add_edge(1, 0); // same undirected edge

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn test_self_loop_registers_node_only() {
        let mut g = SocialGraph::new();
        g.add_edge(5, 5);

        assert!(g.contains(5));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(5), 0);
    }

    #[test]
    fn test_neighbors_undirected() {
        let mut g = SocialGraph::new();
        g.add_edge(0, 1);
        g.add_edge(2, 0);

        let mut n = g.neighbors(0);
        n.sort_unstable();
        assert_eq!(n, vec![1, 2]);
        assert_eq!(g.neighbors(1), vec![0]);
        assert!(g.neighbors(99).is_empty());
    }

    #[test]
    fn test_from_edge_list() {
        let input = "# SNAP-style comment\n0 1\n0 2\n\n1 2\n2 2\n0 1\n";
        let g = SocialGraph::from_edge_list(input.as_bytes()).unwrap();

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_from_edge_list_malformed() {
        let err = SocialGraph::from_edge_list("0 1\nnot an edge\n".as_bytes()).unwrap_err();
        match err {
            Error::ParseEdge { line, .. } => assert_eq!(line, 2),
            other => panic!("expected ParseEdge, got {other:?}"),
        }
    }

    #[test]
    fn test_stats() {
        let mut g = SocialGraph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);

        let stats = g.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert!((stats.avg_degree - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let g = SocialGraph::new();
        let stats = g.stats();
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.avg_degree, 0.0);
    }
}
