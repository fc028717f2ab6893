//! Read-only traversal.
//!
//! Nodes are visited pre-order: a node first, then each of its children in
//! quadrant order. Traversal borrows the tree immutably and keeps no state
//! between runs.

use crate::QuadTree;

/// Pre-order iterator over the nodes of a tree.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    stack: Vec<&'a QuadTree>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a QuadTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the top-left child comes off the stack first.
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = &'a QuadTree;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Summary counts for a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub nodes: usize,
    pub leaves: usize,
    /// Points currently stored across all leaves.
    pub points: usize,
    /// Points lost during subdivision.
    pub dropped: usize,
    /// Depth of the deepest node.
    pub deepest: usize,
}

impl QuadTree {
    /// Iterate over this node and all of its descendants, pre-order.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Call `f` on this node and all of its descendants, pre-order.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&QuadTree),
    {
        fn visit<F: FnMut(&QuadTree)>(node: &QuadTree, f: &mut F) {
            f(node);
            for child in node.children() {
                visit(child, f);
            }
        }
        visit(self, &mut f);
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.iter().map(|n| n.points().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|n| n.points().is_empty())
    }

    /// Count nodes, leaves, stored and dropped points.
    pub fn stats(&self) -> TreeStats {
        self.iter().fold(TreeStats::default(), |mut stats, node| {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stats.points += node.points().len();
            stats.dropped += node.dropped().len();
            stats.deepest = stats.deepest.max(node.depth());
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Quadrant, QuadTree, Rectangle, TreeStats};

    fn sample_tree() -> QuadTree {
        let mut t = QuadTree::new(Rectangle::new(0, 0, 100, 100), 1, 3).unwrap();
        for (x, y) in [(10, 10), (90, 90), (30, 30), (60, 10), (20, 80)] {
            assert!(t.insert(Point::new(x, y)));
        }
        t
    }

    #[test]
    fn test_iter_is_preorder_in_quadrant_order() {
        let t = sample_tree();
        let visited: Vec<(usize, Rectangle)> =
            t.iter().map(|n| (n.depth(), *n.boundary())).collect();

        // (10,10) and (30,30) force the top-left quadrant to split once more.
        let expected = vec![
            (0, Rectangle::new(0, 0, 100, 100)),
            (1, Rectangle::new(0, 0, 50, 50)),
            (2, Rectangle::new(0, 0, 25, 25)),
            (2, Rectangle::new(25, 0, 25, 25)),
            (2, Rectangle::new(0, 25, 25, 25)),
            (2, Rectangle::new(25, 25, 25, 25)),
            (1, Rectangle::new(50, 0, 50, 50)),
            (1, Rectangle::new(0, 50, 50, 50)),
            (1, Rectangle::new(50, 50, 50, 50)),
        ];
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_iter_is_repeatable() {
        let t = sample_tree();

        let first: Vec<*const QuadTree> = t.iter().map(|n| n as *const _).collect();
        let second: Vec<*const QuadTree> = t.iter().map(|n| n as *const _).collect();
        assert_eq!(first, second);
        assert_eq!((&t).into_iter().count(), first.len());
    }

    #[test]
    fn test_walk_matches_iter() {
        let t = sample_tree();

        let mut walked = Vec::new();
        t.walk(|n| walked.push((*n.boundary(), n.points().to_vec())));
        let iterated: Vec<_> = t.iter().map(|n| (*n.boundary(), n.points().to_vec())).collect();
        assert_eq!(walked, iterated);
    }

    #[test]
    fn test_leaf_points_visible_through_traversal() {
        let t = sample_tree();
        let top_left = t.child(Quadrant::TopLeft).unwrap();

        assert!(top_left.points().is_empty());
        assert_eq!(
            top_left.child(Quadrant::TopLeft).unwrap().points(),
            &[Point::new(10, 10)]
        );
        assert_eq!(
            top_left.child(Quadrant::BottomRight).unwrap().points(),
            &[Point::new(30, 30)]
        );
    }

    #[test]
    fn test_stats() {
        let t = sample_tree();

        assert_eq!(
            t.stats(),
            TreeStats {
                nodes: 9,
                leaves: 7,
                points: 5,
                dropped: 0,
                deepest: 2,
            }
        );
        assert_eq!(t.len(), 5);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_stats_on_empty_root() {
        let t = QuadTree::new(Rectangle::new(0, 0, 10, 10), 4, 2).unwrap();

        assert_eq!(t.stats().nodes, 1);
        assert_eq!(t.stats().leaves, 1);
        assert!(t.is_empty());
        assert_eq!(t.iter().count(), 1);
    }
}
