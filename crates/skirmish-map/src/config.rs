//! Map layout configuration.

use std::collections::HashSet;

use rand::{Rng, RngExt};
use skirmish_core::{Point, Range};

/// Layout of a grid battle map.
///
/// Node `(x, y)` sits at `(margin + x * spacing, margin + y * spacing)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MapConfig {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
    /// Distance between adjacent nodes.
    pub spacing: f64,
    /// Offset of cell (0, 0) from the origin on both axes.
    pub margin: f64,
    /// Cells that get no node. Cells outside the grid are ignored.
    pub obstacles: Vec<Point>,
    /// Default start cell for a search.
    pub start: Point,
    /// Default target cell for a search.
    pub target: Point,
}

impl Default for MapConfig {
    /// The 20x10 field with a wall at column 10 between rows 3 and 6.
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            spacing: 50.0,
            margin: 10.0,
            obstacles: vec![
                Point::new(10, 3),
                Point::new(10, 4),
                Point::new(10, 5),
                Point::new(10, 6),
                Point::new(9, 7),
                Point::new(8, 7),
            ],
            start: Point::new(0, 5),
            target: Point::new(19, 4),
        }
    }
}

impl MapConfig {
    /// A `width` x `height` grid with no obstacles.
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
            start: Point::ZERO,
            target: Point::new(width - 1, height - 1),
            ..Self::default()
        }
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Block each free cell with probability `density` (clamped to
    /// `0.0..=1.0`). `start` and `target` are never blocked.
    ///
    /// Returns the number of obstacles added.
    pub fn scatter_obstacles(&mut self, rng: &mut impl Rng, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let taken: HashSet<Point> = self.obstacles.iter().copied().collect();
        let before = self.obstacles.len();
        for p in self.bounds() {
            if p == self.start || p == self.target || taken.contains(&p) {
                continue;
            }
            if rng.random_bool(density) {
                self.obstacles.push(p);
            }
        }
        self.obstacles.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_layout() {
        let cfg = MapConfig::default();
        assert_eq!(cfg.bounds().len(), 200);
        assert_eq!(cfg.obstacles.len(), 6);
        assert_eq!(cfg.start, Point::new(0, 5));
        assert_eq!(cfg.target, Point::new(19, 4));
    }

    #[test]
    fn scatter_keeps_endpoints_free() {
        let mut cfg = MapConfig::open(12, 12);
        let added = cfg.scatter_obstacles(&mut StdRng::seed_from_u64(3), 1.0);
        assert_eq!(added, 144 - 2);
        assert!(!cfg.obstacles.contains(&cfg.start));
        assert!(!cfg.obstacles.contains(&cfg.target));
    }

    #[test]
    fn scatter_is_seeded() {
        let mut a = MapConfig::default();
        let mut b = MapConfig::default();
        a.scatter_obstacles(&mut StdRng::seed_from_u64(42), 0.25);
        b.scatter_obstacles(&mut StdRng::seed_from_u64(42), 0.25);
        assert_eq!(a, b);
        assert!(a.obstacles.len() > 6);

        let mut none = MapConfig::default();
        let added = none.scatter_obstacles(&mut StdRng::seed_from_u64(1), -0.5);
        assert_eq!(added, 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: MapConfig =
            serde_json::from_str(r#"{"width":8,"obstacles":[{"x":3,"y":1}]}"#).unwrap();
        assert_eq!(cfg.width, 8);
        assert_eq!(cfg.height, 10);
        assert_eq!(cfg.obstacles, vec![Point::new(3, 1)]);
        assert_eq!(cfg.spacing, 50.0);
    }
}
