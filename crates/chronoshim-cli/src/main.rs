//! Chronoshim renderer entry point.

use std::error::Error;

use chronoshim_env::config::ShimConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber. Logs go to stderr so stdout carries only
    // the script.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    // Read configuration from environment.
    let config = ShimConfig::from_env()?;
    tracing::info!(reference_instant = %config.reference_instant, "Rendering determinism shim");

    chronoshim_cli::run(&config)?;

    Ok(())
}
