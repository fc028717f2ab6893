//! Quadviz - fill a quadtree with random points and draw it.

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadviz v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(viz::DEFAULT_CONFIG_PATH));

    let config = viz::Config::load(&path)?;
    info!("Loaded configuration from {}", path.display());
    info!("  Boundary: {}", config.tree.boundary());
    info!("  Capacity: {}", config.tree.capacity);
    info!("  Max depth: {}", config.tree.max_depth);
    info!("  Points: {}", config.points.count);

    let summary = viz::run(&config)?;
    info!(
        "Tree has {} nodes ({} leaves), {} points, deepest level {}",
        summary.stats.nodes, summary.stats.leaves, summary.stats.points, summary.stats.deepest
    );

    Ok(())
}
