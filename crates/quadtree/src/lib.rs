//! Point quadtree for 2D integer coordinates.
//!
//! This crate contains:
//! - `Rectangle` boundaries and their inclusive containment test
//! - `QuadTree` insertion with capacity/depth gated subdivision
//! - Read-only pre-order traversal and tree statistics
//! - The `InsertObserver` hook used by callers that want to log insertion

mod error;
mod geometry;
mod observer;
mod traversal;
mod tree;

pub use error::QuadTreeError;
pub use geometry::{Quadrant, Rectangle};
pub use observer::{InsertObserver, NoopObserver};
pub use traversal::{Nodes, TreeStats};
pub use tree::{MAX_DEPTH_LIMIT, QuadTree};

/// A 2D point using glam's integer vector.
pub type Point = glam::IVec2;
