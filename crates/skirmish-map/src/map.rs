//! Grid battle map backed by a [`NodeGraph`].

use std::collections::HashSet;

use log::debug;
use skirmish_core::{Point, Range, Vec2};
use skirmish_paths::{Graph, NodeGraph, NodeId, Path, PathFinder, SearchResult};

use crate::config::MapConfig;
use crate::error::MapError;

/// Nodes laid out on a regular grid, one per free cell.
///
/// Each node is linked to the nodes directly left of and above it when
/// those cells are free, which makes the whole map 4-connected. Edge
/// weights are the distance between node positions, so the graph is not
/// tied to the grid spacing.
#[derive(Debug, Clone)]
pub struct GridMap {
    bounds: Range,
    graph: NodeGraph,
    /// Row-major cell -> node table.
    cells: Vec<Option<NodeId>>,
    /// Node -> cell table, indexed by `NodeId`.
    node_cells: Vec<Point>,
}

impl GridMap {
    /// Build the map described by `config`.
    pub fn generate(config: &MapConfig) -> Result<Self, MapError> {
        if config.width <= 0
            || config.height <= 0
            || !config.spacing.is_finite()
            || config.spacing <= 0.0
            || !config.margin.is_finite()
        {
            return Err(MapError::InvalidDimensions {
                width: config.width,
                height: config.height,
                spacing: config.spacing,
                margin: config.margin,
            });
        }

        let bounds = config.bounds();
        let blocked: HashSet<Point> = config
            .obstacles
            .iter()
            .copied()
            .filter(|&p| bounds.contains(p))
            .collect();

        let mut map = Self {
            bounds,
            graph: NodeGraph::with_capacity(bounds.len() - blocked.len()),
            cells: vec![None; bounds.len()],
            node_cells: Vec::with_capacity(bounds.len() - blocked.len()),
        };

        for p in bounds {
            if blocked.contains(&p) {
                continue;
            }
            let pos = Vec2::new(
                config.margin + p.x as f64 * config.spacing,
                config.margin + p.y as f64 * config.spacing,
            );
            let id = map.graph.add_node(pos);
            for q in [p.shift(-1, 0), p.shift(0, -1)] {
                if let Some(other) = map.node_at(q) {
                    map.graph.connect(id, other)?;
                }
            }
            if let Some(i) = bounds.index_of(p) {
                map.cells[i] = Some(id);
            }
            map.node_cells.push(p);
        }

        debug!(
            "generated {}x{} map: {} nodes, {} obstacles",
            config.width,
            config.height,
            map.graph.len(),
            blocked.len()
        );
        Ok(map)
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The underlying search graph.
    #[inline]
    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    /// Node at `cell`, or `None` for obstacles and cells outside the map.
    pub fn node_at(&self, cell: Point) -> Option<NodeId> {
        self.bounds.index_of(cell).and_then(|i| self.cells[i])
    }

    /// Cell of `node`, or `None` if the node is not part of this map.
    pub fn cell_of(&self, node: NodeId) -> Option<Point> {
        self.node_cells.get(node.index()).copied()
    }

    /// Position of the node at `cell`.
    pub fn position_of(&self, cell: Point) -> Option<Vec2> {
        self.node_at(cell).map(|id| self.graph.position(id))
    }

    /// Whether `cell` is inside the map but has no node.
    pub fn is_obstacle(&self, cell: Point) -> bool {
        self.bounds.contains(cell) && self.node_at(cell).is_none()
    }

    /// Cells visited by `path`, in path order.
    pub fn cells_of(&self, path: &Path) -> Vec<Point> {
        path.iter().filter_map(|&id| self.cell_of(id)).collect()
    }

    /// Search from cell `from` to cell `to` with `finder`.
    pub fn find_path(
        &self,
        finder: &mut PathFinder,
        from: Point,
        to: Point,
    ) -> Result<SearchResult, MapError> {
        let start = self.node_at(from).ok_or(MapError::NoNodeAt(from))?;
        let target = self.node_at(to).ok_or(MapError::NoNodeAt(to))?;
        Ok(finder.find_path(&self.graph, start, target)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_paths::{Edge, SearchError};

    #[test]
    fn obstacles_have_no_node() {
        let map = GridMap::generate(&MapConfig::default()).unwrap();
        assert_eq!(map.graph().len(), 194);
        assert!(map.is_obstacle(Point::new(10, 4)));
        assert!(map.is_obstacle(Point::new(8, 7)));
        assert!(!map.is_obstacle(Point::new(10, 7)));
        assert!(!map.is_obstacle(Point::new(20, 0)));
        assert_eq!(map.node_at(Point::new(20, 0)), None);
    }

    #[test]
    fn neighbours_are_orthogonal() {
        let map = GridMap::generate(&MapConfig::open(3, 3)).unwrap();
        let g = map.graph();
        let center = map.node_at(Point::new(1, 1)).unwrap();
        let cells: Vec<_> = g
            .neighbors(center)
            .iter()
            .map(|e| map.cell_of(e.to).unwrap())
            .collect();
        // left and up at creation, then right and down as they are placed
        let expected = [(0, 1), (1, 0), (2, 1), (1, 2)].map(|(x, y)| Point::new(x, y));
        assert_eq!(cells, expected);
        assert!(g.neighbors(center).iter().all(|e| e.weight == 50.0));

        let corner = map.node_at(Point::new(0, 0)).unwrap();
        assert_eq!(g.neighbors(corner).len(), 2);
    }

    #[test]
    fn weights_follow_positions() {
        let cfg = MapConfig {
            spacing: 3.0,
            margin: 0.0,
            ..MapConfig::open(2, 1)
        };
        let map = GridMap::generate(&cfg).unwrap();
        let a = map.node_at(Point::new(0, 0)).unwrap();
        let b = map.node_at(Point::new(1, 0)).unwrap();
        assert_eq!(map.graph().neighbors(b), &[Edge { to: a, weight: 3.0 }]);
        assert_eq!(map.position_of(Point::new(1, 0)), Some(Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn obstacles_cut_edges() {
        let cfg = MapConfig {
            obstacles: vec![Point::new(1, 0), Point::new(-4, 2)],
            ..MapConfig::open(3, 1)
        };
        let map = GridMap::generate(&cfg).unwrap();
        assert_eq!(map.graph().len(), 2);
        for cell in [Point::new(0, 0), Point::new(2, 0)] {
            let id = map.node_at(cell).unwrap();
            assert!(map.graph().neighbors(id).is_empty());
        }
    }

    #[test]
    fn rejects_degenerate_grids() {
        for cfg in [
            MapConfig::open(0, 5),
            MapConfig::open(4, -1),
            MapConfig {
                spacing: 0.0,
                ..MapConfig::open(2, 2)
            },
            MapConfig {
                spacing: f64::INFINITY,
                ..MapConfig::open(4, 1)
            },
            MapConfig {
                spacing: f64::NAN,
                ..MapConfig::open(4, 1)
            },
            MapConfig {
                margin: f64::NAN,
                ..MapConfig::open(4, 1)
            },
            MapConfig {
                margin: f64::NEG_INFINITY,
                ..MapConfig::open(4, 1)
            },
        ] {
            assert!(matches!(
                GridMap::generate(&cfg),
                Err(MapError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn overflowing_layout_is_rejected() {
        let cfg = MapConfig {
            spacing: f64::MAX,
            ..MapConfig::open(3, 1)
        };
        assert!(matches!(
            GridMap::generate(&cfg),
            Err(MapError::Search(SearchError::InvalidEdge { .. }))
        ));
    }

    #[test]
    fn find_path_needs_free_cells() {
        let map = GridMap::generate(&MapConfig::default()).unwrap();
        let mut finder = PathFinder::new();
        let wall = Point::new(10, 5);
        assert_eq!(
            map.find_path(&mut finder, Point::new(0, 0), wall),
            Err(MapError::NoNodeAt(wall))
        );
        assert_eq!(
            map.find_path(&mut finder, Point::new(-1, 0), Point::new(0, 0)),
            Err(MapError::NoNodeAt(Point::new(-1, 0)))
        );
        let here = Point::new(3, 3);
        let node = map.node_at(here).unwrap();
        assert_eq!(
            map.find_path(&mut finder, here, here),
            Err(MapError::Search(SearchError::SameEndpoints(node)))
        );
    }
}
