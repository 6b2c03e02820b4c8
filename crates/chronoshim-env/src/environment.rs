//! Per-context determinism environment.
//!
//! An `Environment` is the shim for one execution context: it owns the
//! context's bindings after both overrides are installed, including the only
//! generator state. Contexts never share an environment, so parallel hosts
//! get independent sequences without any locking.

use chrono::{DateTime, Utc};
use chronoshim_core::clock::Clock;
use chronoshim_core::date::{DateArgs, DateValue};
use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use chronoshim_core::rng::RandomSource;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::globals::Globals;

/// The determinism shim installed into one execution context.
#[derive(Debug)]
pub struct Environment {
    context_id: Uuid,
    instant: ReferenceInstant,
    globals: Globals,
}

impl Environment {
    /// Creates an environment over native bindings with the shim installed.
    ///
    /// # Errors
    ///
    /// Never fails for native bindings; the `Result` mirrors
    /// [`Environment::with_globals`].
    pub fn new(instant: ReferenceInstant) -> Result<Self, ShimError> {
        Self::with_globals(Globals::native(), instant)
    }

    /// Installs the shim onto host-supplied bindings.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::AlreadyInstalled` if `globals` already carry the
    /// clock override.
    #[instrument(skip_all, fields(reference_instant = %instant))]
    pub fn with_globals(globals: Globals, instant: ReferenceInstant) -> Result<Self, ShimError> {
        let globals = globals.install(instant)?;
        let context_id = Uuid::new_v4();
        info!(%context_id, "determinism shim installed");
        Ok(Self {
            context_id,
            instant,
            globals,
        })
    }

    /// Identifier of this execution context, for correlating log output.
    #[must_use]
    pub fn context_id(&self) -> Uuid {
        self.context_id
    }

    /// The instant this context is pinned to.
    #[must_use]
    pub fn reference_instant(&self) -> ReferenceInstant {
        self.instant
    }

    /// `new Date(...args)`.
    #[must_use]
    pub fn date(&self, args: &DateArgs) -> DateValue {
        self.globals.date().construct(args)
    }

    /// `Date()` called as a plain function.
    #[must_use]
    pub fn date_call(&self) -> String {
        self.globals.date().call()
    }

    /// `Date.now()`.
    #[must_use]
    pub fn date_now(&self) -> f64 {
        self.globals.date().now()
    }

    /// `Math.random()`: advances the generator and returns the next value in
    /// `[0, 1)`.
    pub fn next_random(&mut self) -> f64 {
        self.globals.random_mut().next_f64()
    }

    /// Releases the bindings for registration with a script engine.
    #[must_use]
    pub fn into_globals(self) -> Globals {
        self.globals
    }
}

impl Clock for Environment {
    fn now(&self) -> DateTime<Utc> {
        self.date(&DateArgs::Now)
            .to_datetime()
            .unwrap_or_else(|| self.instant.as_datetime())
    }
}

impl RandomSource for Environment {
    fn next_f64(&mut self) -> f64 {
        self.next_random()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chronoshim_clock::domain::native::NativeDate;
    use chronoshim_test_support::{FixedClock, SequenceRng};

    use super::*;

    const REFERENCE_MILLIS: i64 = 1_700_000_000_000;

    fn instant() -> ReferenceInstant {
        ReferenceInstant::from_millis(REFERENCE_MILLIS).unwrap()
    }

    fn environment() -> Environment {
        let native = NativeDate::new(Box::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )));
        let globals = Globals::new(Box::new(native), Box::new(SequenceRng::new(vec![])));
        Environment::with_globals(globals, instant()).unwrap()
    }

    #[test]
    fn test_now_is_reference_instant() {
        let env = environment();
        assert_eq!(env.now(), instant().as_datetime());
        assert_eq!(env.now_millis(), REFERENCE_MILLIS);
    }

    #[test]
    fn test_date_now_matches_zero_arg_date() {
        let env = environment();
        assert_eq!(
            env.date_now().to_bits(),
            env.date(&DateArgs::Now).get_time().to_bits()
        );
    }

    #[test]
    fn test_date_call_formats_reference() {
        assert_eq!(
            environment().date_call(),
            "Tue Nov 14 2023 22:13:20 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_random_never_touches_native_source() {
        // The native SequenceRng is empty and would panic if drawn from.
        let mut env = environment();
        for _ in 0..100 {
            let value = env.next_random();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_random_source_capability_delegates() {
        let mut a = environment();
        let mut b = environment();
        assert_eq!(a.next_f64().to_bits(), b.next_random().to_bits());
        assert!(a.next_u32_range(1, 6) >= 1);
    }

    #[test]
    fn test_contexts_are_identified_separately() {
        assert_ne!(environment().context_id(), environment().context_id());
        assert_eq!(environment().reference_instant(), instant());
    }

    #[test]
    fn test_into_globals_keeps_override() {
        let globals = environment().into_globals();
        assert!(globals.date().is_override());
    }
}
