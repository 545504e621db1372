use skirmish_core::{Point, Vec2};

/// Straight-line (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Vec2, b: Vec2) -> f64 {
    a.distance(b)
}

/// Manhattan (L1) distance between two grid cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
