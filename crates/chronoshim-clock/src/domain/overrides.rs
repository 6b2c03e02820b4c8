//! The clock override bound in place of the native date constructor.

use chrono::{DateTime, Utc};
use chronoshim_core::clock::Clock;
use chronoshim_core::date::{DateArgs, DateConstructor, DateValue};
use chronoshim_core::instant::ReferenceInstant;

/// A date constructor that pins "now" to a reference instant.
///
/// The constructor it replaces is moved in at construction and is reachable
/// only from here, so forwarding can never re-enter the override itself.
#[derive(Debug)]
pub struct ClockOverride {
    original: Box<dyn DateConstructor>,
    instant: ReferenceInstant,
}

impl ClockOverride {
    /// Wraps `original`, pinning zero-argument construction to `instant`.
    #[must_use]
    pub fn new(original: Box<dyn DateConstructor>, instant: ReferenceInstant) -> Self {
        Self { original, instant }
    }
}

impl DateConstructor for ClockOverride {
    #[allow(clippy::cast_precision_loss)]
    fn construct(&self, args: &DateArgs) -> DateValue {
        match args {
            DateArgs::Now => self
                .original
                .construct(&DateArgs::Timestamp(self.instant.as_millis() as f64)),
            explicit => self.original.construct(explicit),
        }
    }

    fn is_override(&self) -> bool {
        true
    }
}

impl Clock for ClockOverride {
    fn now(&self) -> DateTime<Utc> {
        self.instant.as_datetime()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chronoshim_core::date::DateComponents;
    use chronoshim_test_support::FixedClock;

    use super::*;
    use crate::domain::native::NativeDate;

    const REFERENCE_MILLIS: i64 = 1_700_000_000_000;

    fn native() -> NativeDate {
        NativeDate::new(Box::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )))
    }

    fn shimmed() -> ClockOverride {
        ClockOverride::new(
            Box::new(native()),
            ReferenceInstant::from_millis(REFERENCE_MILLIS).unwrap(),
        )
    }

    #[test]
    fn test_zero_args_yields_reference_instant() {
        let clock = shimmed();
        for _ in 0..3 {
            assert_eq!(
                clock.construct(&DateArgs::Now).time_value(),
                Some(REFERENCE_MILLIS)
            );
        }
    }

    #[test]
    fn test_explicit_args_match_native() {
        let clock = shimmed();
        let native = native();
        let cases = [
            DateArgs::ymd(2020.0, 0.0, 1.0),
            DateArgs::Timestamp(0.0),
            DateArgs::Timestamp(f64::NAN),
            DateArgs::Text("2001-09-09T01:46:40Z".to_owned()),
            DateArgs::Text("garbage".to_owned()),
            DateArgs::Copy(DateValue::from_millis(123)),
            DateArgs::Components(DateComponents::new(1999.0, 11.0).day(31.0).time(
                23.0, 59.0, 59.0, 999.0,
            )),
        ];
        for args in &cases {
            assert_eq!(clock.construct(args), native.construct(args), "{args:?}");
        }
    }

    #[test]
    fn test_now_accessor_matches_zero_arg_construction() {
        let clock = shimmed();
        assert_eq!(
            Clock::now(&clock),
            clock.construct(&DateArgs::Now).to_datetime().unwrap()
        );
        #[allow(clippy::cast_precision_loss)]
        let expected = REFERENCE_MILLIS as f64;
        assert!((DateConstructor::now(&clock) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_call_formats_reference_instant() {
        assert_eq!(
            shimmed().call(),
            "Tue Nov 14 2023 22:13:20 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_clock_capability_returns_reference_instant() {
        let clock = shimmed();
        assert_eq!(Clock::now_millis(&clock), REFERENCE_MILLIS);
        assert!(clock.is_override());
    }
}
