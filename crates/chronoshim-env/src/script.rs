//! Injectable page script.
//!
//! The snippet is shipped as a template with one placeholder identifier for
//! the reference instant. The placeholder is a bare identifier on purpose: a
//! host that forgets to substitute it gets a `ReferenceError` when the script
//! loads instead of a page silently running on the real clock.

use chronoshim_core::instant::ReferenceInstant;

const TEMPLATE: &str = include_str!("shim.js");

/// Identifier substituted with the epoch-millisecond literal.
pub const PLACEHOLDER: &str = "__REFERENCE_INSTANT__";

/// The determinism shim as page script source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShimScript;

impl ShimScript {
    /// Returns the unrendered template, for hosts that substitute the
    /// placeholder themselves.
    #[must_use]
    pub fn template() -> &'static str {
        TEMPLATE
    }

    /// Returns the script with the reference instant substituted.
    #[must_use]
    pub fn render(instant: ReferenceInstant) -> String {
        TEMPLATE.replace(PLACEHOLDER, &instant.to_string())
    }
}
