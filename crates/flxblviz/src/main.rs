//! flxblviz: package-directory history of an sfdx monorepo
//!
//! This binary walks the commits that changed `sfdx-project.json`, records
//! the declared package directories of each one, and writes the resulting
//! time series for the visualization page.

use clap::Parser;
use flxblviz::config::Config;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing subscriber on stderr; stdout carries the dataset
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Starting flxblviz");

    flxblviz::app::run(&config)?;
    Ok(())
}
