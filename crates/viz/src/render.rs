//! Raster rendering of a tree.
//!
//! The canvas covers the root boundary one pixel per unit, including its
//! inclusive right and bottom edges. Each node's boundary is outlined with a
//! stroke that thickens with depth, and each stored point gets a filled disc.

use crate::config::RenderConfig;
use anyhow::{Context, ensure};
use glam::IVec2;
use image::{ImageFormat, Rgb, RgbImage};
use quadtree::{Point, QuadTree, Rectangle};
use std::path::Path;

/// Largest canvas side we are willing to allocate.
pub const MAX_CANVAS_SIDE: u32 = 16384;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BOUNDARY: Rgb<u8> = Rgb([0, 0, 0]);
const POINT: Rgb<u8> = Rgb([255, 0, 0]);

/// Stroke width in pixels for a node at `depth`.
pub fn stroke_width(config: &RenderConfig, depth: usize) -> f32 {
    config.base_stroke + depth as f32 * config.stroke_per_depth
}

/// Draw the tree onto a fresh canvas.
pub fn render(tree: &QuadTree, config: &RenderConfig) -> anyhow::Result<RgbImage> {
    let root = tree.boundary();
    let width = u32::try_from(root.width)?.saturating_add(1);
    let height = u32::try_from(root.height)?.saturating_add(1);
    ensure!(
        width <= MAX_CANVAS_SIDE && height <= MAX_CANVAS_SIDE,
        "canvas {}x{} exceeds {} pixels per side",
        width,
        height,
        MAX_CANVAS_SIDE
    );

    // Anything wider than the canvas paints the same pixels.
    let radius = config.point_radius.clamp(0, MAX_CANVAS_SIDE as i32);

    let mut canvas = Canvas {
        image: RgbImage::from_pixel(width, height, BACKGROUND),
        origin: root.origin(),
    };

    tree.walk(|node| {
        canvas.stroke_rect(node.boundary(), stroke_width(config, node.depth()), BOUNDARY);
        for &point in node.points() {
            canvas.fill_circle(point, radius, POINT);
        }
    });

    Ok(canvas.image)
}

/// Write the image as PNG.
pub fn save(image: &RgbImage, path: &Path) -> anyhow::Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

struct Canvas {
    image: RgbImage,
    /// Tree coordinates of pixel (0, 0).
    origin: IVec2,
}

impl Canvas {
    #[inline]
    fn local(&self, point: Point) -> IVec2 {
        point - self.origin
    }

    /// Fill the inclusive pixel range, clipped to the canvas.
    fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        let max_x = self.image.width() as i32 - 1;
        let max_y = self.image.height() as i32 - 1;
        let (x0, x1) = (x0.max(0), x1.min(max_x));
        let (y0, y1) = (y0.max(0), y1.min(max_y));
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rectangle, stroke: f32, color: Rgb<u8>) {
        let thickness = stroke.round().clamp(1.0, MAX_CANVAS_SIDE as f32) as i32;
        // Band of `thickness` pixels centred on each edge.
        let lo = -((thickness - 1) / 2);
        let hi = lo + thickness - 1;

        let tl = self.local(rect.origin());
        let br = tl + IVec2::new(rect.width, rect.height);

        self.fill(tl.x + lo, tl.y + lo, br.x + hi, tl.y + hi, color);
        self.fill(tl.x + lo, br.y + lo, br.x + hi, br.y + hi, color);
        self.fill(tl.x + lo, tl.y + lo, tl.x + hi, br.y + hi, color);
        self.fill(br.x + lo, tl.y + lo, br.x + hi, br.y + hi, color);
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb<u8>) {
        let c = self.local(center);
        let r = radius.max(0);
        let r_sq = i64::from(r) * i64::from(r);
        let max_x = self.image.width() as i32 - 1;
        let max_y = self.image.height() as i32 - 1;

        // Only visit the part of the bounding square that is on the canvas.
        let (y0, y1) = ((c.y - r).max(0), (c.y + r).min(max_y));
        let (x0, x1) = ((c.x - r).max(0), (c.x + r).min(max_x));
        for y in y0..=y1 {
            let dy = i64::from(y - c.y);
            for x in x0..=x1 {
                let dx = i64::from(x - c.x);
                if dx * dx + dy * dy <= r_sq {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
