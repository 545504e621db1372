use std::fmt;

use skirmish_core::Vec2;

use crate::error::SearchError;
use crate::traits::Graph;

/// Stable identity of a node inside one graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A weighted edge to a neighbouring node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

#[derive(Clone, Debug)]
struct GraphNode {
    pos: Vec2,
    edges: Vec<Edge>,
}

/// Owned adjacency-list graph.
///
/// Every connection is stored in both directions with the same weight, so
/// the [`Graph`] symmetry contract holds by construction.
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
    nodes: Vec<GraphNode>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Add an isolated node at `pos` and return its id.
    pub fn add_node(&mut self, pos: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode {
            pos,
            edges: Vec::new(),
        });
        id
    }

    /// Connect `a` and `b` with the straight-line distance as weight.
    ///
    /// Fails when either position is not finite, since the distance would
    /// not be either.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<f64, SearchError> {
        self.check_pair(a, b)?;
        let w = self.span(a, b);
        if !w.is_finite() {
            return Err(SearchError::InvalidEdge {
                from: a,
                to: b,
                reason: "distance is not finite",
            });
        }
        self.push_pair(a, b, w);
        Ok(w)
    }

    /// Connect `a` and `b` with an explicit weight.
    ///
    /// The weight must be finite and at least the straight-line distance
    /// between the two positions, otherwise the distance estimate used by
    /// the search would overestimate.
    pub fn connect_with_weight(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: f64,
    ) -> Result<(), SearchError> {
        self.check_pair(a, b)?;
        let invalid = |reason: &'static str| SearchError::InvalidEdge {
            from: a,
            to: b,
            reason,
        };
        if !weight.is_finite() {
            return Err(invalid("weight is not finite"));
        }
        if weight < 0.0 {
            return Err(invalid("weight is negative"));
        }
        if weight < self.span(a, b) {
            return Err(invalid("weight is shorter than the straight-line distance"));
        }
        self.push_pair(a, b, weight);
        Ok(())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `a` lists `b` as a neighbour.
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes
            .get(a.index())
            .is_some_and(|n| n.edges.iter().any(|e| e.to == b))
    }

    fn check_pair(&self, a: NodeId, b: NodeId) -> Result<(), SearchError> {
        for id in [a, b] {
            if !self.contains(id) {
                return Err(SearchError::UnknownNode(id));
            }
        }
        if a == b {
            return Err(SearchError::InvalidEdge {
                from: a,
                to: b,
                reason: "self-loop",
            });
        }
        Ok(())
    }

    fn span(&self, a: NodeId, b: NodeId) -> f64 {
        let (pa, pb) = (self.nodes[a.index()].pos, self.nodes[b.index()].pos);
        pa.distance(pb)
    }

    fn push_pair(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.nodes[a.index()].edges.push(Edge { to: b, weight });
        self.nodes[b.index()].edges.push(Edge { to: a, weight });
    }
}

impl Graph for NodeGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id.index()].pos
    }

    fn neighbors(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id.index()].edges
    }
}
