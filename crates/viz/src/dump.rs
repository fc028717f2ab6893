//! Text dump of a tree.

use quadtree::QuadTree;
use tracing::info;

/// Describe every node pre-order, followed by the points stored at it.
pub fn lines(tree: &QuadTree) -> Vec<String> {
    let mut out = Vec::new();
    tree.walk(|node| {
        out.push(format!(
            "Depth {}, Boundary: {}, Points: {}",
            node.depth(),
            node.boundary(),
            node.points().len()
        ));
        for (i, point) in node.points().iter().enumerate() {
            out.push(format!("  point {}: {}x {}y", i, point.x, point.y));
        }
    });
    out
}

/// Log the dump at info level.
pub fn log(tree: &QuadTree) {
    for line in lines(tree) {
        info!("{}", line);
    }
}
