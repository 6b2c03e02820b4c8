//! Date construction seam.
//!
//! A page script constructs dates through one global binding. The binding is
//! modelled as a [`DateConstructor`] and the arguments it receives as a tagged
//! [`DateArgs`] variant, so "zero arguments" versus "explicit arguments" is a
//! match arm rather than an arity check.

use chrono::{DateTime, Utc};

/// Largest magnitude of a platform time value, in milliseconds (±100,000,000
/// days around the epoch).
pub const MAX_TIME_VALUE: i64 = 8_640_000_000_000_000;

/// Text produced when formatting a date whose time value is `NaN`.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar components for `new Date(year, month, day, hours, minutes,
/// seconds, ms)`.
///
/// Fields are script numbers: `month` is zero-based, and any field may be out
/// of range (it carries into the next larger unit) or non-finite (the result
/// is an invalid date).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateComponents {
    /// Full year; `0..=99` means `1900..=1999`.
    pub year: f64,
    /// Zero-based month.
    pub month: f64,
    /// Day of month, starting at 1.
    pub day: f64,
    /// Hours.
    pub hours: f64,
    /// Minutes.
    pub minutes: f64,
    /// Seconds.
    pub seconds: f64,
    /// Milliseconds.
    pub millis: f64,
}

impl DateComponents {
    /// Components for the first instant of `month` in `year`.
    #[must_use]
    pub fn new(year: f64, month: f64) -> Self {
        Self {
            year,
            month,
            day: 1.0,
            hours: 0.0,
            minutes: 0.0,
            seconds: 0.0,
            millis: 0.0,
        }
    }

    /// Sets the day of month.
    #[must_use]
    pub fn day(mut self, day: f64) -> Self {
        self.day = day;
        self
    }

    /// Sets the time of day.
    #[must_use]
    pub fn time(mut self, hours: f64, minutes: f64, seconds: f64, millis: f64) -> Self {
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
        self.millis = millis;
        self
    }
}

/// The arguments a date construction was invoked with.
#[derive(Debug, Clone, PartialEq)]
pub enum DateArgs {
    /// `new Date()`: no arguments.
    Now,
    /// `new Date(ms)`: a single numeric time value.
    Timestamp(f64),
    /// `new Date(text)`: a single string to parse.
    Text(String),
    /// `new Date(other)`: a copy of an existing date.
    Copy(DateValue),
    /// `new Date(year, month, ...)`: two or more calendar components.
    Components(DateComponents),
}

impl DateArgs {
    /// Shorthand for `new Date(year, month, day)`.
    #[must_use]
    pub fn ymd(year: f64, month: f64, day: f64) -> Self {
        Self::Components(DateComponents::new(year, month).day(day))
    }
}

/// A constructed date: a time value in epoch milliseconds, or `NaN` for an
/// invalid date.
///
/// Time values outside the range `chrono` can represent as a calendar date
/// are treated as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValue {
    time_value: Option<i64>,
}

impl DateValue {
    /// The invalid date.
    pub const INVALID: Self = Self { time_value: None };

    /// Creates a date from epoch milliseconds, applying the platform range
    /// clip.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() > MAX_TIME_VALUE as u64
            || DateTime::from_timestamp_millis(millis).is_none()
        {
            return Self::INVALID;
        }
        Self {
            time_value: Some(millis),
        }
    }

    /// Creates a date from a UTC date-time, truncated to milliseconds.
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self::from_millis(at.timestamp_millis())
    }

    /// Creates a date from a script number: non-finite or out-of-range values
    /// are invalid, others are truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() || value.abs() > MAX_TIME_VALUE as f64 {
            return Self::INVALID;
        }
        Self::from_millis(value.trunc() as i64)
    }

    /// Returns the time value, or `None` for an invalid date.
    #[must_use]
    pub fn time_value(self) -> Option<i64> {
        self.time_value
    }

    /// Returns the time value as a script number (`getTime()`), `NaN` for an
    /// invalid date.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get_time(self) -> f64 {
        self.time_value.map_or(f64::NAN, |ms| ms as f64)
    }

    /// Returns `true` unless this is the invalid date.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.time_value.is_some()
    }

    /// Converts to a UTC date-time.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        self.time_value.and_then(DateTime::from_timestamp_millis)
    }

    /// Formats like the platform's `toString()` with UTC as the local zone.
    #[must_use]
    pub fn to_js_string(self) -> String {
        match self.to_datetime() {
            Some(at) => at
                .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
                .to_string(),
            None => INVALID_DATE.to_owned(),
        }
    }
}

/// The global date constructor of an execution context.
pub trait DateConstructor: Send + Sync + std::fmt::Debug {
    /// `new Date(...args)`.
    fn construct(&self, args: &DateArgs) -> DateValue;

    /// `Date(...)` invoked as a plain function: the current time as text,
    /// whatever the arguments.
    fn call(&self) -> String {
        self.construct(&DateArgs::Now).to_js_string()
    }

    /// `Date.now()`: the time value of a zero-argument construction.
    fn now(&self) -> f64 {
        self.construct(&DateArgs::Now).get_time()
    }

    /// Returns `true` if this binding is the clock override rather than a
    /// native constructor.
    fn is_override(&self) -> bool {
        false
    }
}
