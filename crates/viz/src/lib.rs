//! Quadtree visualiser library.
//!
//! Generates random points, feeds them into a `quadtree::QuadTree`, logs the
//! resulting structure and draws it to a PNG.

pub mod config;
pub mod dump;
pub mod observer;
pub mod pipeline;
pub mod points;
pub mod render;

// Re-export commonly used types
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use observer::TracingObserver;
pub use pipeline::{RunSummary, run};
