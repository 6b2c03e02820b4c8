//! Shim configuration.

use std::path::PathBuf;

use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use serde::{Deserialize, Serialize};

/// Environment variable holding the reference instant.
pub const REFERENCE_INSTANT_VAR: &str = "SHIM_REFERENCE_INSTANT";

/// Environment variable holding an optional output path for the rendered
/// script.
pub const OUTPUT_VAR: &str = "SHIM_OUTPUT";

/// Settings for rendering the shim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShimConfig {
    /// Instant the rendered script pins time and randomness to.
    pub reference_instant: ReferenceInstant,
    /// Where to write the script; standard output when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ShimConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::Config` if the reference instant is missing and
    /// `ShimError::InvalidReferenceInstant` if it cannot be parsed.
    pub fn from_env() -> Result<Self, ShimError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Same as [`ShimConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShimError> {
        let raw = lookup(REFERENCE_INSTANT_VAR).ok_or_else(|| {
            ShimError::Config(format!("{REFERENCE_INSTANT_VAR} environment variable must be set"))
        })?;
        let reference_instant: ReferenceInstant = raw.parse()?;
        let output = lookup(OUTPUT_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            reference_instant,
            output,
        })
    }

    /// Parses a JSON configuration document. The reference instant is given
    /// in epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::Config` if the document is malformed or the
    /// instant is out of range.
    pub fn from_json(json: &str) -> Result<Self, ShimError> {
        serde_json::from_str(json).map_err(|e| ShimError::Config(format!("invalid config: {e}")))
    }
}
