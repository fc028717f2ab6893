//! Insertion logging.

use quadtree::{InsertObserver, Point, Rectangle};
use tracing::{debug, trace, warn};

/// Observer that reports tree events through `tracing` and counts them.
#[derive(Debug, Default)]
pub struct TracingObserver {
    /// Points appended to a leaf, re-stores during a split included.
    pub stores: usize,
    /// Leaves split into four children.
    pub splits: usize,
    /// Points lost during a split.
    pub drops: usize,
}

impl InsertObserver for TracingObserver {
    fn stored(&mut self, point: Point, boundary: &Rectangle, depth: usize) {
        self.stores += 1;
        trace!(
            "point ({}x {}y) assigned to quadtree w/ boundary {} at depth {}",
            point.x,
            point.y,
            boundary,
            depth
        );
    }

    fn subdivided(&mut self, boundary: &Rectangle, depth: usize) {
        self.splits += 1;
        debug!("Subdividing {} at depth {}", boundary, depth);
    }

    fn dropped(&mut self, point: Point, boundary: &Rectangle, depth: usize) {
        self.drops += 1;
        warn!(
            "Point ({}x {}y) lost while splitting {} at depth {}: no child covers it",
            point.x,
            point.y,
            boundary,
            depth
        );
    }
}
