//! Native date constructor semantics.
//!
//! `NativeDate` is the constructor an execution context starts with, and the
//! one the clock override captures and forwards to. Local time is UTC.

use std::fmt;

use chrono::NaiveDate;
use chronoshim_core::clock::{Clock, SystemClock};
use chronoshim_core::date::{DateArgs, DateComponents, DateConstructor, DateValue};

use super::parse::parse_date_text;

const MS_PER_DAY: f64 = 86_400_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_SECOND: f64 = 1_000.0;

/// Beyond this many years from year zero no calendar date is representable,
/// so the component is rejected before any integer conversion.
const MAX_YEAR_MAGNITUDE: f64 = 400_000.0;

/// The platform date constructor, reading "now" from an injected clock.
pub struct NativeDate {
    clock: Box<dyn Clock>,
}

impl NativeDate {
    /// Creates a native constructor over the given clock.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Creates a native constructor over the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl fmt::Debug for NativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeDate").finish_non_exhaustive()
    }
}

impl DateConstructor for NativeDate {
    fn construct(&self, args: &DateArgs) -> DateValue {
        match args {
            DateArgs::Now => DateValue::from_millis(self.clock.now_millis()),
            DateArgs::Timestamp(value) => DateValue::from_f64(*value),
            DateArgs::Text(text) => parse_date_text(text),
            DateArgs::Copy(other) => *other,
            DateArgs::Components(components) => from_components(components),
        }
    }
}

/// `MakeDate(MakeDay(year, month, day), MakeTime(h, m, s, ms))` with the
/// two-digit-year rule applied first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn from_components(c: &DateComponents) -> DateValue {
    let fields = [c.year, c.month, c.day, c.hours, c.minutes, c.seconds, c.millis];
    if fields.iter().any(|field| !field.is_finite()) {
        return DateValue::INVALID;
    }

    let mut year = c.year.trunc();
    if (0.0..=99.0).contains(&year) {
        year += 1900.0;
    }
    let month = c.month.trunc();
    let year = year + (month / 12.0).floor();
    let month = month.rem_euclid(12.0);
    if year.abs() > MAX_YEAR_MAGNITUDE {
        return DateValue::INVALID;
    }

    let Some(first_of_month) = NaiveDate::from_ymd_opt(year as i32, month as u32 + 1, 1) else {
        return DateValue::INVALID;
    };
    let epoch_day = first_of_month
        .signed_duration_since(NaiveDate::default())
        .num_days() as f64;
    let days = epoch_day + c.day.trunc() - 1.0;
    let time = c.hours.trunc() * MS_PER_HOUR
        + c.minutes.trunc() * MS_PER_MINUTE
        + c.seconds.trunc() * MS_PER_SECOND
        + c.millis.trunc();

    DateValue::from_f64(days * MS_PER_DAY + time)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chronoshim_test_support::FixedClock;

    use super::*;

    fn native() -> NativeDate {
        NativeDate::new(Box::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )))
    }

    fn components(year: f64, month: f64, day: f64) -> Option<i64> {
        native().construct(&DateArgs::ymd(year, month, day)).time_value()
    }

    #[test]
    fn test_zero_args_reads_injected_clock() {
        let date = native().construct(&DateArgs::Now);
        assert_eq!(
            date.to_datetime(),
            Some(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_month_is_zero_based() {
        assert_eq!(components(2020.0, 0.0, 1.0), Some(1_577_836_800_000));
    }

    #[test]
    fn test_month_overflow_carries_into_year() {
        assert_eq!(components(2019.0, 12.0, 1.0), components(2020.0, 0.0, 1.0));
        assert_eq!(components(2020.0, -1.0, 1.0), components(2019.0, 11.0, 1.0));
    }

    #[test]
    fn test_day_zero_is_last_day_of_previous_month() {
        assert_eq!(components(2020.0, 2.0, 0.0), components(2020.0, 1.0, 29.0));
    }

    #[test]
    fn test_two_digit_years_map_to_twentieth_century() {
        assert_eq!(components(99.0, 0.0, 1.0), components(1999.0, 0.0, 1.0));
        assert_eq!(components(0.0, 0.0, 1.0), components(1900.0, 0.0, 1.0));
        assert_ne!(components(100.0, 0.0, 1.0), components(2000.0, 0.0, 1.0));
    }

    #[test]
    fn test_time_fields_carry_over() {
        let args = DateArgs::Components(
            DateComponents::new(2023.0, 10.0)
                .day(14.0)
                .time(22.0, 13.0, 20.0, 0.0),
        );
        assert_eq!(native().construct(&args).time_value(), Some(1_700_000_000_000));

        let overflowing = DateArgs::Components(
            DateComponents::new(2023.0, 10.0)
                .day(13.0)
                .time(46.0, 13.0, 20.0, 0.0),
        );
        assert_eq!(
            native().construct(&overflowing).time_value(),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn test_non_finite_component_is_invalid() {
        assert_eq!(components(f64::NAN, 0.0, 1.0), None);
        assert_eq!(components(2020.0, f64::INFINITY, 1.0), None);
    }

    #[test]
    fn test_unrepresentable_year_is_invalid() {
        assert_eq!(components(1.0e9, 0.0, 1.0), None);
    }

    #[test]
    fn test_timestamp_and_copy_pass_through() {
        let date = native().construct(&DateArgs::Timestamp(1_700_000_000_000.0));
        assert_eq!(date.time_value(), Some(1_700_000_000_000));
        assert_eq!(native().construct(&DateArgs::Copy(date)), date);
    }

    #[test]
    fn test_call_formats_current_time() {
        assert_eq!(
            native().call(),
            "Thu Jan 15 2026 10:00:00 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_native_is_not_an_override() {
        assert!(!NativeDate::system().is_override());
    }
}
