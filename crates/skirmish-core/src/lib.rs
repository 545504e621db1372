//! **skirmish-core**: geometry primitives shared across the *skirmish*
//! crates.
//!
//! Grid cells are addressed by integer [`Point`]s inside a half-open
//! [`Range`]; graph nodes sit at floating-point [`Vec2`] positions.

pub mod geom;

pub use geom::{Point, Range, RangeIter, Vec2};
