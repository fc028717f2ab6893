//! Random input points.

use quadtree::{Point, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the point generator, seeded when a seed is given.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `count` points uniformly in `[x, x + width) x [y, y + height)`.
///
/// A zero width or height pins that axis to the boundary origin.
pub fn generate<R>(rng: &mut R, boundary: &Rectangle, count: usize) -> Vec<Point>
where
    R: Rng,
{
    (0..count)
        .map(|_| {
            Point::new(
                boundary.x + offset(&mut *rng, boundary.width),
                boundary.y + offset(&mut *rng, boundary.height),
            )
        })
        .collect()
}

#[inline]
fn offset<R: Rng>(rng: &mut R, extent: i32) -> i32 {
    if extent > 0 {
        rng.random_range(0..extent)
    } else {
        0
    }
}
