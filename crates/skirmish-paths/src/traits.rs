use skirmish_core::Vec2;

use crate::distance::euclidean;
use crate::graph::{Edge, NodeId};

/// Read-only view of a weighted graph whose nodes have 2D positions.
///
/// Implementations must keep adjacency fixed while a search runs, and the
/// neighbour relation must be symmetric: if `a` lists `b` with weight `w`,
/// then `b` lists `a` with weight `w`.
pub trait Graph {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Whether `id` belongs to this graph.
    fn contains(&self, id: NodeId) -> bool {
        id.index() < self.node_count()
    }

    /// Position of `id`. Only called with ids for which
    /// [`contains`](Self::contains) holds.
    fn position(&self, id: NodeId) -> Vec2;

    /// Outgoing edges of `id`, in a fixed order.
    fn neighbors(&self, id: NodeId) -> &[Edge];

    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        euclidean(self.position(from), self.position(to))
    }
}
