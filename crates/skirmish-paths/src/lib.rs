//! Bounded A* shortest-path search over weighted position graphs.
//!
//! A [`PathFinder`] expands nodes of any [`Graph`] from a start node toward
//! a target, choosing the open node with the lowest estimated total cost,
//! and gives up after a fixed number of expansions
//! ([`SearchConfig::max_iterations`]). Per-node search metadata lives in an
//! [`AnnotationStore`] owned by the finder and reset before every search, so
//! the graph itself is never mutated.
//!
//! The returned [`Path`] is ordered **target first, start last**. Callers
//! that budget movement by node count use [`Path::len`] directly.
//!
//! ```
//! use skirmish_core::Vec2;
//! use skirmish_paths::{NodeGraph, Outcome, PathFinder};
//!
//! let mut g = NodeGraph::new();
//! let a = g.add_node(Vec2::new(0.0, 0.0));
//! let b = g.add_node(Vec2::new(3.0, 4.0));
//! g.connect(a, b).unwrap();
//!
//! let mut finder = PathFinder::new();
//! let res = finder.find_path(&g, a, b).unwrap();
//! assert_eq!(res.outcome, Outcome::Found);
//! assert_eq!(res.path.nodes(), &[b, a]);
//! assert_eq!(res.cost, 5.0);
//! ```

mod annotation;
mod astar;
mod distance;
mod error;
mod graph;
mod trace;
mod traits;

pub use annotation::{Annotation, AnnotationStore};
pub use astar::{
    DEFAULT_MAX_ITERATIONS, Exhaustion, Outcome, PathFinder, SearchConfig, SearchResult,
};
pub use distance::{euclidean, manhattan};
pub use error::SearchError;
pub use graph::{Edge, NodeGraph, NodeId};
pub use trace::{Path, trace_back};
pub use traits::Graph;
