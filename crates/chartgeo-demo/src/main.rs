//! chartgeo demo
//!
//! Computes geometry for a JSON array of chart specs (or a set of mock specs)
//! and prints it as JSON.
//!
//! ```text
//! chartgeo-demo [specs.json]
//! RUST_LOG=chartgeo_engine=debug chartgeo-demo
//! ```

mod mock;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chartgeo_charts::{ChartGeometry, ChartSpec, GeometryCache};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let specs = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read spec file '{}'", path.display()))?;
            let specs = ChartSpec::list_from_json(&json)
                .with_context(|| format!("failed to parse chart specs in '{}'", path.display()))?;
            info!("Loaded {} chart specs from {}", specs.len(), path.display());
            specs
        }
        None => {
            let specs = mock::mock_specs();
            info!("No spec file given, generated {} mock chart specs", specs.len());
            specs
        }
    };

    if specs.is_empty() {
        anyhow::bail!("no chart specs to compute");
    }

    let mut cache = GeometryCache::default();
    let geometries: Vec<_> = specs
        .iter()
        .map(|spec| {
            let geometry = cache.get_or_compute(spec);
            info!(kind = spec.kind(), view_box = geometry.view_box(), "Computed chart");
            geometry
        })
        .collect();

    info!(
        hits = cache.hits(),
        misses = cache.misses(),
        "Computed {} charts",
        geometries.len()
    );

    let views: Vec<&ChartGeometry> = geometries.iter().map(|g| g.as_ref()).collect();
    let output = serde_json::to_string_pretty(&views).context("failed to serialize geometry")?;
    println!("{}", output);

    Ok(())
}
