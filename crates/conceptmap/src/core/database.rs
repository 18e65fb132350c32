//! Core database trait for concept storage
//!
//! The parser fills a database and the renderer reads it back. Nodes are
//! the concepts themselves; edges are the relationships each node owns.

use anyhow::Result;

/// Core trait for concept databases
///
/// Implementations keep nodes in a deterministic order so that rendering the
/// same database twice produces the same text.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Add a node, replacing any node stored under the same key
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Get a node by key
    fn get_node(&self, id: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges, grouped by owning node
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
