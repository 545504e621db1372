//! Error type for graph construction and search.

use thiserror::Error;

use crate::graph::NodeId;

/// Failures local to a single graph edit or [`PathFinder`](crate::PathFinder)
/// call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A node id does not belong to the graph being searched.
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    /// Start and target are the same node; there is nothing to search.
    #[error("start and target are the same node ({0})")]
    SameEndpoints(NodeId),

    /// An edge would break the graph contract.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: &'static str,
    },

    /// The search stopped without reaching the target.
    #[error("no route from {start} to {target} after {iterations} iterations")]
    Unreachable {
        start: NodeId,
        target: NodeId,
        iterations: usize,
    },
}
