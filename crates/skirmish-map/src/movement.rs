//! Movement range checks for units.

use skirmish_paths::{NodeId, SearchResult};

/// How far a unit may move in one turn, counted in path nodes.
///
/// The count includes the node the unit stands on, so a unit with speed 3
/// can end up at most two steps away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAllowance {
    pub speed: usize,
}

/// Decision for a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    /// The unit may move to `destination` (the path's index 0).
    Allowed { destination: NodeId },
    /// The route is longer than the allowance.
    TooFar { nodes: usize, speed: usize },
    /// The search never reached the requested node.
    Unreachable,
}

impl MoveVerdict {
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, MoveVerdict::Allowed { .. })
    }
}

impl MoveAllowance {
    pub const fn new(speed: usize) -> Self {
        Self { speed }
    }

    /// Judge a move along the route in `result`.
    pub fn check(self, result: &SearchResult) -> MoveVerdict {
        if !result.is_found() {
            return MoveVerdict::Unreachable;
        }
        let nodes = result.path.len();
        match result.path.terminal() {
            Some(destination) if nodes <= self.speed => MoveVerdict::Allowed { destination },
            Some(_) => MoveVerdict::TooFar {
                nodes,
                speed: self.speed,
            },
            None => MoveVerdict::Unreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridMap, MapConfig};
    use skirmish_core::Point;
    use skirmish_paths::{PathFinder, SearchConfig};

    #[test]
    fn speed_counts_nodes_inclusively() {
        let map = GridMap::generate(&MapConfig::open(5, 1)).unwrap();
        let mut finder = PathFinder::new();
        let res = map
            .find_path(&mut finder, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(res.path.len(), 3);

        let dest = map.node_at(Point::new(2, 0)).unwrap();
        assert_eq!(
            MoveAllowance::new(3).check(&res),
            MoveVerdict::Allowed { destination: dest }
        );
        assert_eq!(
            MoveAllowance::new(2).check(&res),
            MoveVerdict::TooFar { nodes: 3, speed: 2 }
        );
    }

    #[test]
    fn exhausted_search_is_never_a_legal_move() {
        let map = GridMap::generate(&MapConfig::open(8, 1)).unwrap();
        let mut finder = PathFinder::with_config(SearchConfig { max_iterations: 2 });
        let res = map
            .find_path(&mut finder, Point::new(0, 0), Point::new(7, 0))
            .unwrap();
        assert!(!res.is_found());
        assert!(res.path.len() <= 8);
        assert!(!MoveAllowance::new(8).check(&res).is_allowed());
        assert_eq!(MoveAllowance::new(8).check(&res), MoveVerdict::Unreachable);
    }
}
