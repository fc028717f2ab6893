//! Insertion observer hook.

use crate::{Point, Rectangle};

/// Receives notifications while points are inserted.
///
/// All methods default to doing nothing, so implementors only override the
/// events they care about.
pub trait InsertObserver {
    /// A point was appended to the leaf with this boundary.
    fn stored(&mut self, _point: Point, _boundary: &Rectangle, _depth: usize) {}

    /// The leaf with this boundary was split into four children.
    fn subdivided(&mut self, _boundary: &Rectangle, _depth: usize) {}

    /// A point held by a splitting node was not accepted by any child.
    fn dropped(&mut self, _point: Point, _boundary: &Rectangle, _depth: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl InsertObserver for NoopObserver {}
