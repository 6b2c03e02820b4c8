//! Chronoshim CLI — error types.

use chronoshim_core::error::ShimError;
use thiserror::Error;

/// Startup and runtime errors for the renderer.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Shim(#[from] ShimError),

    /// Output could not be written.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_error_message_passes_through() {
        let err = CliError::from(ShimError::Config("SHIM_REFERENCE_INSTANT missing".into()));
        assert_eq!(err.to_string(), "configuration error: SHIM_REFERENCE_INSTANT missing");
    }

    #[test]
    fn test_io_error_is_prefixed() {
        let err = CliError::from(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "output error: disk full");
    }
}
