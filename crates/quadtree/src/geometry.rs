//! Rectangle boundaries and quadrant layout.

use crate::Point;

/// One of the four children of a subdivided node.
///
/// Y grows downward, so "top" is the smaller Y half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Child index of this quadrant (0..4).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column of this quadrant in the 2x2 grid (0 = left, 1 = right).
    #[inline]
    const fn column(self) -> i32 {
        (self as i32) % 2
    }

    /// Row of this quadrant in the 2x2 grid (0 = top, 1 = bottom).
    #[inline]
    const fn row(self) -> i32 {
        (self as i32) / 2
    }
}

/// Axis-aligned rectangle given by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (`x + width`), widened so it cannot overflow.
    #[inline]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Bottom edge (`y + height`), widened so it cannot overflow.
    #[inline]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Check whether the point lies inside the rectangle.
    ///
    /// Both edges are inclusive, so `x + width` and `y + height` are inside.
    /// Sibling quadrants therefore share their common edge, and a point on it
    /// belongs to whichever sibling is tried first.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        i64::from(self.x) <= px
            && i64::from(self.y) <= py
            && px <= self.right()
            && py <= self.bottom()
    }

    /// Boundary of one child quadrant.
    ///
    /// Every child gets half of the width and height rounded toward zero, so
    /// on odd sizes the children leave a one unit strip along the right and
    /// bottom edges that none of them covers.
    #[inline]
    pub fn quadrant(&self, quadrant: Quadrant) -> Rectangle {
        let half_w = self.width / 2;
        let half_h = self.height / 2;
        Rectangle {
            x: self.x + quadrant.column() * half_w,
            y: self.y + quadrant.row() * half_h,
            width: half_w,
            height: half_h,
        }
    }

    /// All four child boundaries in quadrant order.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} {} {} {}}}", self.x, self.y, self.width, self.height)
    }
}
