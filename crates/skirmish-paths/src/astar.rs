//! Bounded A* search.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::annotation::{Annotation, AnnotationStore};
use crate::error::SearchError;
use crate::graph::NodeId;
use crate::trace::{Path, trace_back};
use crate::traits::Graph;

/// Expansion budget used by [`SearchConfig::default`].
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Tunables for [`PathFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Maximum number of node expansions before the search gives up.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Why a search stopped short of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exhaustion {
    /// The expansion budget ran out.
    IterationCap,
    /// Nothing was left to expand: the target is not connected to the start.
    EmptyFrontier,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The target was expanded; the path is a shortest route.
    Found,
    /// The search stopped early. The path leads to the last expanded node,
    /// which may be nowhere near the target.
    Exhausted(Exhaustion),
}

/// Result of [`PathFinder::find_path`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub start: NodeId,
    pub target: NodeId,
    /// Terminal-first node sequence (see [`Path`]).
    pub path: Path,
    pub outcome: Outcome,
    /// Accumulated edge weight from the start to the terminal node.
    pub cost: f64,
    /// Number of expansions performed.
    pub iterations: usize,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// The path if the target was reached, otherwise
    /// [`SearchError::Unreachable`].
    pub fn into_found(self) -> Result<Path, SearchError> {
        match self.outcome {
            Outcome::Found => Ok(self.path),
            Outcome::Exhausted(_) => Err(SearchError::Unreachable {
                start: self.start,
                target: self.target,
                iterations: self.iterations,
            }),
        }
    }
}

/// A* driver with an expansion budget.
///
/// The finder owns its annotation store and frontier buffers and resets them
/// at the start of every [`find_path`](Self::find_path), so a single finder
/// can serve any number of sequential searches, over one graph or several.
///
/// The open set keeps insertion order. Among open nodes with equal estimated
/// total cost, the one discovered first is expanded first, which makes
/// results reproducible.
pub struct PathFinder {
    config: SearchConfig,
    store: AnnotationStore,
    open: Vec<NodeId>,
    open_set: HashSet<NodeId>,
    closed: HashSet<NodeId>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a finder with the default budget of
    /// [`DEFAULT_MAX_ITERATIONS`] expansions.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            store: AnnotationStore::new(),
            open: Vec::new(),
            open_set: HashSet::new(),
            closed: HashSet::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Annotations left by the most recent search.
    pub fn annotations(&self) -> &AnnotationStore {
        &self.store
    }

    /// Drop all state of the previous search.
    pub fn reset(&mut self) {
        self.reset_for(0);
    }

    /// Search for the cheapest route from `start` to `target`.
    ///
    /// Returns an error only for invalid input. A search that runs out of
    /// budget or frontier still returns `Ok`, tagged
    /// [`Outcome::Exhausted`].
    pub fn find_path<G: Graph>(
        &mut self,
        graph: &G,
        start: NodeId,
        target: NodeId,
    ) -> Result<SearchResult, SearchError> {
        for id in [start, target] {
            if !graph.contains(id) {
                return Err(SearchError::UnknownNode(id));
            }
        }
        if start == target {
            return Err(SearchError::SameEndpoints(start));
        }

        self.reset_for(graph.node_count());
        self.store.insert(start, Annotation::root());
        self.closed.insert(start);

        let mut current = start;
        let mut iterations = 0;
        let mut exhaustion = None;

        while current != target {
            if iterations == self.config.max_iterations {
                exhaustion = Some(Exhaustion::IterationCap);
                break;
            }
            self.expand(graph, start, current);
            iterations += 1;

            let Some(next) = self.select(graph, target) else {
                exhaustion = Some(Exhaustion::EmptyFrontier);
                break;
            };
            trace!("expanded {current}, next {next}, {} open", self.open.len());
            current = next;
        }

        let outcome = match exhaustion {
            None => {
                debug!("found path {start} -> {target} in {iterations} iterations");
                Outcome::Found
            }
            Some(reason) => {
                warn!(
                    "gave up on {start} -> {target} after {iterations} iterations ({reason:?}), \
                     falling back to {current}"
                );
                Outcome::Exhausted(reason)
            }
        };

        Ok(SearchResult {
            start,
            target,
            path: trace_back(&self.store, current),
            outcome,
            cost: self.distance(current),
            iterations,
        })
    }

    fn reset_for(&mut self, node_count: usize) {
        self.store.reset(node_count);
        self.open.clear();
        self.open_set.clear();
        self.closed.clear();
    }

    /// Discover or relax every neighbour of `current`, and queue the ones
    /// seen for the first time.
    fn expand<G: Graph>(&mut self, graph: &G, start: NodeId, current: NodeId) {
        let through = self.distance(current);
        for edge in graph.neighbors(current) {
            let n = edge.to;
            // The root annotation anchors every chain; never replace it.
            if n != start {
                match self.store.distance_to_start(n) {
                    Some(known) => {
                        if through + edge.weight < known {
                            self.store.relax(n, current, edge.weight);
                        }
                    }
                    None => self
                        .store
                        .insert(n, Annotation::discovered(current, edge.weight)),
                }
            }
            if !self.open_set.contains(&n) && !self.closed.contains(&n) {
                self.open.push(n);
                self.open_set.insert(n);
            }
        }
    }

    /// Move the open node with the lowest `g + h` to the closed set.
    /// The first minimum in insertion order wins.
    fn select<G: Graph>(&mut self, graph: &G, target: NodeId) -> Option<NodeId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &id) in self.open.iter().enumerate() {
            let f = self.distance(id) + graph.estimate(id, target);
            if best.is_none_or(|(_, best_f)| f < best_f) {
                best = Some((i, f));
            }
        }
        let (i, _) = best?;

        let id = self.open.remove(i);
        self.open_set.remove(&id);
        self.closed.insert(id);
        self.store.mark_visited(id);
        Some(id)
    }

    #[inline]
    fn distance(&self, id: NodeId) -> f64 {
        self.store.distance_to_start(id).unwrap_or(f64::INFINITY)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_defaults_missing_fields() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_iterations":64}"#).unwrap();
        assert_eq!(cfg.max_iterations, 64);
    }
}
