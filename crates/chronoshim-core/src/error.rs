//! Shim error types.
//!
//! Every call made through an installed shim is total; these errors only
//! surface while an execution context is being set up.

use thiserror::Error;

/// Top-level setup error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShimError {
    /// The reference instant is out of range or could not be parsed.
    #[error("invalid reference instant: {0}")]
    InvalidReferenceInstant(String),

    /// Generator constants would produce a degenerate sequence.
    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),

    /// The clock override is already bound in this execution context.
    #[error("determinism shim is already installed in this execution context")]
    AlreadyInstalled,

    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}
