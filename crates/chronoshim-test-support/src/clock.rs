//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use chronoshim_core::clock::Clock;

/// A clock that always returns a fixed point in time.
///
/// Stands in for the system clock underneath a native date constructor, so
/// tests can tell "the real now" apart from the reference instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
