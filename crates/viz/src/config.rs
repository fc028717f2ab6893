//! Visualiser configuration.

use quadtree::Rectangle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "quadtree.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// Root boundary and split settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Root origin X.
    #[serde(default)]
    pub x: i32,
    /// Root origin Y.
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_root_size")]
    pub width: i32,
    #[serde(default = "default_root_size")]
    pub height: i32,
    /// Points a node holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Depth at which nodes stop splitting (0 = root never splits).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl TreeConfig {
    pub fn boundary(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_root_size(),
            height: default_root_size(),
            capacity: default_capacity(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_root_size() -> i32 {
    1000
}
fn default_capacity() -> usize {
    4
}
fn default_max_depth() -> usize {
    10
}

/// Random input settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PointsConfig {
    /// Number of points to generate.
    #[serde(default = "default_point_count")]
    pub count: usize,
    /// Fixed RNG seed; a fresh OS seed is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: default_point_count(),
            seed: None,
        }
    }
}

fn default_point_count() -> usize {
    100
}

/// Image output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// PNG file to write.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Radius in pixels of the marker drawn for each point.
    #[serde(default = "default_point_radius")]
    pub point_radius: i32,
    /// Boundary stroke width at the root.
    #[serde(default = "default_base_stroke")]
    pub base_stroke: f32,
    /// Extra stroke width added per level of depth.
    #[serde(default = "default_stroke_per_depth")]
    pub stroke_per_depth: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            output: default_output(),
            point_radius: default_point_radius(),
            base_stroke: default_base_stroke(),
            stroke_per_depth: default_stroke_per_depth(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_output() -> PathBuf {
    PathBuf::from("quadtree.png")
}
fn default_point_radius() -> i32 {
    2
}
fn default_base_stroke() -> f32 {
    1.0
}
fn default_stroke_per_depth() -> f32 {
    0.5
}

/// Console output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log every node and its points after insertion.
    #[serde(default = "default_true")]
    pub dump_tree: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dump_tree: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.tree.boundary(), Rectangle::new(0, 0, 1000, 1000));
        assert_eq!(config.tree.capacity, 4);
        assert_eq!(config.tree.max_depth, 10);
        assert_eq!(config.points.count, 100);
        assert_eq!(config.points.seed, None);
        assert!(config.render.enabled);
        assert_eq!(config.render.output, PathBuf::from("quadtree.png"));
        assert_eq!(config.render.point_radius, 2);
        assert!(config.log.dump_tree);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [tree]
            x = -50
            width = 64
            capacity = 1
            max_depth = 0

            [points]
            seed = 42

            [render]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.tree.boundary(), Rectangle::new(-50, 0, 64, 1000));
        assert_eq!(config.tree.capacity, 1);
        assert_eq!(config.tree.max_depth, 0);
        assert_eq!(config.points.seed, Some(42));
        assert_eq!(config.points.count, 100);
        assert!(!config.render.enabled);
        assert_eq!(config.render.base_stroke, 1.0);
    }

    #[test]
    fn test_default_survives_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.tree.boundary(), Config::default().tree.boundary());
        assert_eq!(parsed.points.seed, None);
        assert_eq!(parsed.render.stroke_per_depth, 0.5);
    }

    #[test]
    fn test_load_creates_default_file() {
        let path = std::env::temp_dir().join(format!("quadviz-config-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let created = Config::load(&path).unwrap();
        assert!(path.exists());
        let reloaded = Config::load(&path).unwrap();
        assert_eq!(created.tree.boundary(), reloaded.tree.boundary());

        std::fs::remove_file(&path).unwrap();
    }
}
