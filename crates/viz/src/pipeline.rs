//! End to end run: build the tree, fill it, dump it, draw it.

use crate::config::Config;
use crate::observer::TracingObserver;
use crate::{dump, points, render};
use quadtree::{QuadTree, TreeStats};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a single run.
#[derive(Debug)]
pub struct RunSummary {
    pub tree: QuadTree,
    /// Points fed to the tree.
    pub generated: usize,
    /// Points the tree refused on insertion.
    pub rejected: usize,
    pub stats: TreeStats,
    /// Image written, if rendering was enabled.
    pub output: Option<PathBuf>,
}

/// Run the whole pipeline for `config`.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    let boundary = config.tree.boundary();
    let mut tree = QuadTree::new(boundary, config.tree.capacity, config.tree.max_depth)?;

    let mut rng = points::rng(config.points.seed);
    let input = points::generate(&mut rng, &boundary, config.points.count);
    info!("Generated {} points in {}", input.len(), boundary);

    let mut observer = TracingObserver::default();
    let mut rejected = 0;
    for (i, point) in input.iter().enumerate() {
        debug!("inserting point {}: {}x {}y", i, point.x, point.y);
        if !tree.insert_with(*point, &mut observer) {
            rejected += 1;
            warn!("Point {} ({}x {}y) was not stored", i, point.x, point.y);
        }
    }
    info!(
        "Inserted {} points: {} splits, {} rejected, {} dropped",
        input.len(),
        observer.splits,
        rejected,
        observer.drops
    );

    if config.log.dump_tree {
        dump::log(&tree);
    }

    let output = if config.render.enabled {
        let image = render::render(&tree, &config.render)?;
        render::save(&image, &config.render.output)?;
        info!(
            "Saved quadtree visualization to {}",
            config.render.output.display()
        );
        Some(config.render.output.clone())
    } else {
        None
    };

    let stats = tree.stats();
    Ok(RunSummary {
        tree,
        generated: input.len(),
        rejected,
        stats,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless(seed: u64) -> Config {
        let mut config = Config::default();
        config.points.seed = Some(seed);
        config.render.enabled = false;
        config.log.dump_tree = false;
        config
    }

    #[test]
    fn test_power_of_two_root_stores_everything() {
        let mut config = headless(5);
        config.tree.width = 1024;
        config.tree.height = 1024;
        let summary = run(&config).unwrap();

        assert_eq!(summary.generated, 100);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.stats.dropped, 0);
        assert_eq!(summary.stats.points, 100);
        assert!(summary.stats.deepest <= 10);
        assert!(summary.output.is_none());
    }

    #[test]
    fn test_same_seed_same_tree() {
        let a = run(&headless(21)).unwrap();
        let b = run(&headless(21)).unwrap();

        assert_eq!(a.tree, b.tree);
    }

    #[test]
    fn test_invalid_tree_settings_fail() {
        let mut config = headless(1);
        config.tree.capacity = 0;
        assert!(run(&config).is_err());

        let mut config = headless(1);
        config.tree.max_depth = 200_000;
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_writes_png() {
        let mut config = headless(8);
        config.tree.width = 64;
        config.tree.height = 64;
        config.points.count = 20;
        config.render.enabled = true;
        config.render.output =
            std::env::temp_dir().join(format!("quadviz-run-{}.png", std::process::id()));

        let summary = run(&config).unwrap();
        let path = summary.output.unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (65, 65));

        std::fs::remove_file(&path).unwrap();
    }
}
