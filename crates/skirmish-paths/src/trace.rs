//! Path reconstruction from predecessor annotations.

use crate::annotation::AnnotationStore;
use crate::graph::NodeId;

/// Node sequence produced by a search, ordered **terminal first, start last**.
///
/// For a successful search the terminal node is the target. The node count
/// ([`len`](Self::len)) is what movement budgets are compared against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Number of nodes, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The node the trace started from (index 0).
    pub fn terminal(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// The search's start node (last index).
    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Follow predecessors from `terminal` back to the node whose predecessor
/// is `None`, collecting every node on the way.
///
/// An unannotated `terminal` yields an empty path.
pub fn trace_back(store: &AnnotationStore, terminal: NodeId) -> Path {
    let mut nodes = Vec::new();
    let mut cur = Some(terminal);
    while let Some(id) = cur {
        let Some(a) = store.get(id) else {
            break;
        };
        nodes.push(id);
        debug_assert!(nodes.len() <= store.len(), "predecessor cycle at {id}");
        cur = a.predecessor;
    }
    Path { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;

    fn chain() -> AnnotationStore {
        let mut store = AnnotationStore::new();
        store.reset(4);
        store.insert(NodeId(2), Annotation::root());
        store.insert(NodeId(0), Annotation::discovered(NodeId(2), 1.0));
        store.insert(NodeId(3), Annotation::discovered(NodeId(0), 1.0));
        store
    }

    #[test]
    fn terminal_comes_first() {
        let store = chain();
        let path = trace_back(&store, NodeId(3));
        assert_eq!(path.nodes(), &[NodeId(3), NodeId(0), NodeId(2)]);
        assert_eq!(path.terminal(), Some(NodeId(3)));
        assert_eq!(path.origin(), Some(NodeId(2)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn root_alone() {
        let store = chain();
        let path = trace_back(&store, NodeId(2));
        assert_eq!(path.into_nodes(), vec![NodeId(2)]);
    }

    #[test]
    fn unannotated_terminal_is_empty() {
        let store = chain();
        let path = trace_back(&store, NodeId(1));
        assert!(path.is_empty());
        assert_eq!(path.hops(), 0);
        assert_eq!(path.terminal(), None);
    }
}
