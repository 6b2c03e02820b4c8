//! Installation of the clock override into an execution context.

use chronoshim_core::date::DateConstructor;
use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use tracing::{debug, instrument};

use crate::domain::overrides::ClockOverride;

/// Replaces a context's date constructor binding with the clock override.
///
/// `current` is the binding the context holds right now; it is captured by
/// the override and used for every explicit-argument construction.
///
/// # Errors
///
/// Returns `ShimError::AlreadyInstalled` if `current` is itself a clock
/// override. The binding is dropped in that case; callers that need to keep
/// it check [`DateConstructor::is_override`] first.
#[instrument(skip_all, fields(reference_instant = %instant))]
pub fn install_clock_override(
    current: Box<dyn DateConstructor>,
    instant: ReferenceInstant,
) -> Result<Box<dyn DateConstructor>, ShimError> {
    if current.is_override() {
        return Err(ShimError::AlreadyInstalled);
    }
    debug!("capturing native date constructor");
    Ok(Box::new(ClockOverride::new(current, instant)))
}
