use skirmish_core::Point;
use skirmish_paths::SearchError;
use thiserror::Error;

/// Errors raised while building or querying a [`GridMap`](crate::GridMap).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Width, height or spacing is not positive, or the layout is not finite.
    #[error("invalid map dimensions {width}x{height} with spacing {spacing} and margin {margin}")]
    InvalidDimensions {
        width: i32,
        height: i32,
        spacing: f64,
        margin: f64,
    },

    /// The cell is outside the map or blocked by an obstacle.
    #[error("no node at cell {0}")]
    NoNodeAt(Point),

    #[error(transparent)]
    Search(#[from] SearchError),
}
