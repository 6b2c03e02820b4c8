//! The reference instant every override is anchored to.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShimError;

/// Archival capture timestamps (`YYYYMMDDhhmmss`) are exactly this long.
const ARCHIVAL_TIMESTAMP_LEN: usize = 14;

/// A fixed point in time, in milliseconds since the Unix epoch, that pins
/// every "current time" query and seeds the random generator.
///
/// The value is validated once at construction: it is non-negative (the
/// generator's remainder keeps the sign of its dividend, so a negative seed
/// would yield values below zero) and representable as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ReferenceInstant {
    at: DateTime<Utc>,
}

impl ReferenceInstant {
    /// Creates a reference instant from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::InvalidReferenceInstant` if `millis` is negative
    /// or outside the representable date range.
    pub fn from_millis(millis: i64) -> Result<Self, ShimError> {
        if millis < 0 {
            return Err(ShimError::InvalidReferenceInstant(format!(
                "{millis} is before the Unix epoch"
            )));
        }
        let at = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            ShimError::InvalidReferenceInstant(format!("{millis} is out of range"))
        })?;
        Ok(Self { at })
    }

    /// Creates a reference instant from a UTC date-time, truncated to
    /// millisecond precision.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::InvalidReferenceInstant` if the date-time is
    /// before the Unix epoch.
    pub fn from_datetime(at: DateTime<Utc>) -> Result<Self, ShimError> {
        Self::from_millis(at.timestamp_millis())
    }

    /// Returns the instant as epoch milliseconds.
    #[must_use]
    pub fn as_millis(&self) -> i64 {
        self.at.timestamp_millis()
    }

    /// Returns the instant as a UTC date-time.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.at
    }
}

impl TryFrom<i64> for ReferenceInstant {
    type Error = ShimError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<ReferenceInstant> for i64 {
    fn from(instant: ReferenceInstant) -> Self {
        instant.as_millis()
    }
}

impl FromStr for ReferenceInstant {
    type Err = ShimError;

    /// Parses epoch milliseconds, an RFC 3339 timestamp, or a 14-digit
    /// archival capture timestamp (`YYYYMMDDhhmmss`, UTC).
    ///
    /// A string of exactly 14 digits is always read as an archival
    /// timestamp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShimError::InvalidReferenceInstant(
                "empty reference instant".to_owned(),
            ));
        }

        let all_digits = s.bytes().all(|b| b.is_ascii_digit());
        if all_digits && s.len() == ARCHIVAL_TIMESTAMP_LEN {
            let naive = NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S").map_err(|e| {
                ShimError::InvalidReferenceInstant(format!("bad archival timestamp {s:?}: {e}"))
            })?;
            return Self::from_datetime(naive.and_utc());
        }

        if let Ok(millis) = s.parse::<i64>() {
            return Self::from_millis(millis);
        }

        let parsed = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ShimError::InvalidReferenceInstant(format!("unrecognised timestamp {s:?}: {e}"))
        })?;
        Self::from_datetime(parsed.with_timezone(&Utc))
    }
}

impl fmt::Display for ReferenceInstant {
    /// Formats as the epoch-millisecond literal embedded into scripts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_millis())
    }
}
