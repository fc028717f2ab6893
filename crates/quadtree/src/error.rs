//! Quadtree construction errors.

use thiserror::Error;

/// Errors returned when building a root node from invalid settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadTreeError {
    #[error("Node capacity must be at least 1")]
    ZeroCapacity,

    #[error("Boundary dimensions must be non-negative (width: {width}, height: {height})")]
    NegativeDimensions { width: i32, height: i32 },

    #[error("Boundary extends past the i32 coordinate range")]
    BoundaryOverflow,

    #[error("Max depth {max_depth} exceeds the limit of {limit}")]
    MaxDepthTooLarge { max_depth: usize, limit: usize },
}
