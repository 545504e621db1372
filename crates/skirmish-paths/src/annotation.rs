//! Per-search node metadata, kept outside the graph.

use crate::graph::NodeId;

/// Transient search state for one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Node this one was reached from. `None` only for the start node.
    pub predecessor: Option<NodeId>,
    /// Weight of the edge from `predecessor` to this node (0 for the start).
    pub edge_cost: f64,
    /// Set once the node has been moved from the open to the closed set.
    pub visited: bool,
}

impl Annotation {
    /// Annotation of the search root.
    pub const fn root() -> Self {
        Self {
            predecessor: None,
            edge_cost: 0.0,
            visited: true,
        }
    }

    /// Annotation of a node discovered from `predecessor` over an edge of
    /// weight `edge_cost`.
    pub const fn discovered(predecessor: NodeId, edge_cost: f64) -> Self {
        Self {
            predecessor: Some(predecessor),
            edge_cost,
            visited: false,
        }
    }
}

#[derive(Clone)]
struct Slot {
    annotation: Annotation,
    generation: u32,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            annotation: Annotation::root(),
            generation: 0,
        }
    }
}

/// Map from node id to [`Annotation`], valid for one search at a time.
///
/// Slots are stamped with a generation number; [`reset`](Self::reset) bumps
/// the generation so every annotation of the previous search becomes
/// invisible without touching the slots. The store never grows smaller, so
/// repeated searches over the same graph do not reallocate.
pub struct AnnotationStore {
    slots: Vec<Slot>,
    generation: u32,
    live: usize,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            // Fresh slots carry generation 0, so live stamps start at 1.
            generation: 1,
            live: 0,
        }
    }

    /// Discard every annotation and make room for `node_count` nodes.
    pub fn reset(&mut self, node_count: usize) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide, clear them for real.
            for slot in self.slots.iter_mut() {
                slot.generation = 0;
            }
            self.generation = 1;
        }
        if self.slots.len() < node_count {
            self.slots.resize(node_count, Slot::default());
        }
        self.live = 0;
    }

    /// Number of annotated nodes in the current search.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// The annotation of `id`, if it was created during the current search.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Annotation> {
        self.slots
            .get(id.index())
            .filter(|s| s.generation == self.generation)
            .map(|s| &s.annotation)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Create or replace the annotation of `id`.
    ///
    /// Ids beyond the size given to the last [`reset`](Self::reset) grow the
    /// store.
    pub fn insert(&mut self, id: NodeId, annotation: Annotation) {
        let i = id.index();
        if i >= self.slots.len() {
            self.slots.resize(i + 1, Slot::default());
        }
        let slot = &mut self.slots[i];
        if slot.generation != self.generation {
            slot.generation = self.generation;
            self.live += 1;
        }
        slot.annotation = annotation;
    }

    /// Point `id` at a cheaper `predecessor`. Returns `false` if `id` has
    /// no annotation in the current search.
    pub fn relax(&mut self, id: NodeId, predecessor: NodeId, edge_cost: f64) -> bool {
        match self.get_mut(id) {
            Some(a) => {
                a.predecessor = Some(predecessor);
                a.edge_cost = edge_cost;
                true
            }
            None => false,
        }
    }

    /// Flag `id` as expanded. Returns `false` if `id` has no annotation.
    pub fn mark_visited(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(a) => {
                a.visited = true;
                true
            }
            None => false,
        }
    }

    /// Accumulated cost from the start to `id`, summing `edge_cost` along
    /// the predecessor chain. Returns `None` if `id` is not annotated.
    ///
    /// The chain is walked on every call, so a relaxation anywhere upstream
    /// is reflected immediately.
    pub fn distance_to_start(&self, id: NodeId) -> Option<f64> {
        let mut cur = self.get(id)?;
        let mut dist = 0.0;
        while let Some(prev) = cur.predecessor {
            dist += cur.edge_cost;
            cur = self.get(prev)?;
        }
        Some(dist)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Annotation> {
        let generation = self.generation;
        self.slots
            .get_mut(id.index())
            .filter(|s| s.generation == generation)
            .map(|s| &mut s.annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_sums_the_chain() {
        let mut store = AnnotationStore::new();
        store.reset(4);
        store.insert(NodeId(0), Annotation::root());
        store.insert(NodeId(1), Annotation::discovered(NodeId(0), 2.5));
        store.insert(NodeId(2), Annotation::discovered(NodeId(1), 4.0));
        assert_eq!(store.distance_to_start(NodeId(0)), Some(0.0));
        assert_eq!(store.distance_to_start(NodeId(2)), Some(6.5));
        assert_eq!(store.distance_to_start(NodeId(3)), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn relax_updates_descendants() {
        let mut store = AnnotationStore::new();
        store.reset(4);
        store.insert(NodeId(0), Annotation::root());
        store.insert(NodeId(1), Annotation::discovered(NodeId(0), 10.0));
        store.insert(NodeId(2), Annotation::discovered(NodeId(1), 1.0));
        store.insert(NodeId(3), Annotation::discovered(NodeId(0), 1.0));
        assert_eq!(store.distance_to_start(NodeId(2)), Some(11.0));

        assert!(store.relax(NodeId(1), NodeId(3), 2.0));
        assert_eq!(store.get(NodeId(1)).unwrap().predecessor, Some(NodeId(3)));
        assert_eq!(store.distance_to_start(NodeId(2)), Some(4.0));
    }

    #[test]
    fn reset_hides_previous_search() {
        let mut store = AnnotationStore::new();
        store.reset(3);
        store.insert(NodeId(0), Annotation::root());
        store.insert(NodeId(1), Annotation::discovered(NodeId(0), 1.0));
        assert!(store.mark_visited(NodeId(1)));

        store.reset(3);
        assert!(store.is_empty());
        assert!(!store.contains(NodeId(0)));
        assert!(store.get(NodeId(1)).is_none());
        assert!(!store.relax(NodeId(1), NodeId(0), 1.0));
        assert!(!store.mark_visited(NodeId(1)));
    }

    #[test]
    fn insert_grows_past_reset_size() {
        let mut store = AnnotationStore::new();
        store.reset(1);
        store.insert(NodeId(5), Annotation::root());
        assert!(store.contains(NodeId(5)));
        assert!(!store.contains(NodeId(4)));
    }

    #[test]
    fn generation_wrap_clears_slots() {
        let mut store = AnnotationStore::new();
        store.reset(2);
        store.insert(NodeId(0), Annotation::root());
        // Force the next reset to wrap around.
        store.generation = u32::MAX;
        store.slots[0].generation = 1;
        store.reset(2);
        assert_eq!(store.generation, 1);
        assert!(!store.contains(NodeId(0)));
    }
}
