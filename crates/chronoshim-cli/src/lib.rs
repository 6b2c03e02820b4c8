//! Chronoshim CLI — renders the page script for a configured reference
//! instant.

pub mod error;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chronoshim_env::config::ShimConfig;
use chronoshim_env::script::ShimScript;
use tracing::{info, instrument};

use crate::error::CliError;

/// Renders the shim for `config` and writes it to `out`.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
#[instrument(skip_all, fields(reference_instant = %config.reference_instant))]
pub fn render_to(config: &ShimConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let script = ShimScript::render(config.reference_instant);
    out.write_all(script.as_bytes())?;
    out.flush()?;
    info!(bytes = script.len(), "rendered determinism shim");
    Ok(())
}

/// Renders the shim to the configured output file, or standard output.
///
/// # Errors
///
/// Returns `CliError::Io` if the output cannot be created or written.
pub fn run(config: &ShimConfig) -> Result<(), CliError> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)?;
            render_to(config, &mut BufWriter::new(file))
        }
        None => render_to(config, &mut io::stdout().lock()),
    }
}
