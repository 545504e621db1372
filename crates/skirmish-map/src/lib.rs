//! Grid battle maps for *skirmish*.
//!
//! A [`GridMap`] places one graph node per free cell of a rectangular grid
//! and links orthogonal neighbours, producing a [`NodeGraph`] that
//! [`PathFinder`] can search. [`MoveAllowance`] turns a search result into a
//! movement decision for a unit.
//!
//! [`NodeGraph`]: skirmish_paths::NodeGraph
//! [`PathFinder`]: skirmish_paths::PathFinder

pub mod config;
pub mod error;
pub mod map;
pub mod movement;

pub use config::MapConfig;
pub use error::MapError;
pub use map::GridMap;
pub use movement::{MoveAllowance, MoveVerdict};
