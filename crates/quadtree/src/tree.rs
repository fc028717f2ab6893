//! QuadTree nodes, insertion and subdivision.

use crate::{InsertObserver, NoopObserver, Point, Quadrant, QuadTreeError, Rectangle};

/// Deepest `max_depth` a root accepts.
///
/// An `i32` extent halves to zero after 31 splits; levels past that only
/// repeat zero-size copies of the same cell.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// A quadtree node.
///
/// The root is built with [`QuadTree::new`]; every other node is created by
/// subdivision and owned by its parent. A node is either a leaf holding
/// points directly or an internal node with exactly four children and no
/// points of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadTree {
    boundary: Rectangle,
    /// Points stored here before a split is considered.
    capacity: usize,
    /// Distance from the root (root = 0).
    depth: usize,
    /// Nodes at this depth never split.
    max_depth: usize,
    /// Points stored at this node. Always empty once subdivided.
    points: Vec<Point>,
    /// Children in quadrant order.
    children: Option<Box<[QuadTree; 4]>>,
    /// Points lost while this node was being split.
    dropped: Vec<Point>,
}

impl QuadTree {
    /// Create a root node.
    ///
    /// A `max_depth` of 0 keeps every point in the root. Depths above
    /// [`MAX_DEPTH_LIMIT`] are rejected.
    pub fn new(
        boundary: Rectangle,
        capacity: usize,
        max_depth: usize,
    ) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        if boundary.width < 0 || boundary.height < 0 {
            return Err(QuadTreeError::NegativeDimensions {
                width: boundary.width,
                height: boundary.height,
            });
        }
        if boundary.x.checked_add(boundary.width).is_none()
            || boundary.y.checked_add(boundary.height).is_none()
        {
            return Err(QuadTreeError::BoundaryOverflow);
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadTreeError::MaxDepthTooLarge {
                max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }

        Ok(Self::node(boundary, capacity, 0, max_depth))
    }

    fn node(boundary: Rectangle, capacity: usize, depth: usize, max_depth: usize) -> Self {
        Self {
            boundary,
            capacity,
            depth,
            max_depth,
            points: Vec::new(),
            children: None,
            dropped: Vec::new(),
        }
    }

    #[inline]
    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Points stored directly at this node. Empty for internal nodes.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Children in quadrant order. Empty for leaves.
    #[inline]
    pub fn children(&self) -> &[QuadTree] {
        match &self.children {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    /// Get one child by quadrant, if this node has been subdivided.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c[quadrant.index()])
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Points this node held when it split that no child accepted.
    ///
    /// Only happens on odd sized boundaries, where the children do not cover
    /// the last column or row of the parent.
    #[inline]
    pub fn dropped(&self) -> &[Point] {
        &self.dropped
    }

    /// Insert a point.
    ///
    /// Returns `false` if the point lies outside this node's boundary, or if
    /// the node is subdivided and none of its children covers the point.
    pub fn insert(&mut self, point: Point) -> bool {
        self.insert_with(point, &mut NoopObserver)
    }

    /// Insert a point, reporting stores, splits and drops to `observer`.
    pub fn insert_with<O>(&mut self, point: Point, observer: &mut O) -> bool
    where
        O: InsertObserver + ?Sized,
    {
        if !self.boundary.contains(point) {
            return false;
        }

        if self.children.is_none() {
            // Leaves at max depth take any number of points.
            if self.depth >= self.max_depth || self.points.len() < self.capacity {
                self.points.push(point);
                observer.stored(point, &self.boundary, self.depth);
                return true;
            }
            self.subdivide(&mut *observer);
        }

        self.insert_into_children(point, observer)
    }

    /// Offer the point to each child in quadrant order; first accept wins.
    fn insert_into_children<O>(&mut self, point: Point, observer: &mut O) -> bool
    where
        O: InsertObserver + ?Sized,
    {
        let Some(children) = self.children.as_deref_mut() else {
            return false;
        };
        for child in children.iter_mut() {
            if child.insert_with(point, &mut *observer) {
                return true;
            }
        }
        false
    }

    /// Split a leaf into four children and move its points down.
    fn subdivide<O>(&mut self, observer: &mut O)
    where
        O: InsertObserver + ?Sized,
    {
        debug_assert!(self.children.is_none(), "subdivide called on an internal node");

        let capacity = self.capacity;
        let max_depth = self.max_depth;
        let depth = self.depth + 1;
        let children = self
            .boundary
            .quadrants()
            .map(|boundary| Self::node(boundary, capacity, depth, max_depth));
        self.children = Some(Box::new(children));
        observer.subdivided(&self.boundary, self.depth);

        for point in std::mem::take(&mut self.points) {
            if !self.insert_into_children(point, &mut *observer) {
                observer.dropped(point, &self.boundary, self.depth);
                self.dropped.push(point);
            }
        }
    }
}
