//! Installation of the random override into an execution context.

use chronoshim_core::instant::ReferenceInstant;
use chronoshim_core::rng::RandomSource;
use tracing::{debug, instrument};

use crate::domain::lcg::LcgRandom;

/// Replaces a context's uniform-random binding with an LCG seeded from
/// `instant`.
///
/// The previous binding is dropped: nothing in the context may draw from it
/// once the override is in place. Installing twice re-seeds the generator,
/// restarting the sequence.
#[instrument(skip_all, fields(reference_instant = %instant))]
#[must_use]
pub fn install_random_override(
    current: Box<dyn RandomSource>,
    instant: ReferenceInstant,
) -> Box<dyn RandomSource> {
    debug!(replaced = ?current, "seeding generator from reference instant");
    drop(current);
    Box::new(LcgRandom::seeded(instant))
}
