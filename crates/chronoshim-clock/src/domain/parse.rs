//! Date-string parsing for `new Date(text)`.
//!
//! Accepts the forms page scripts feed the native constructor in practice:
//! ISO 8601 (date-only forms are UTC, date-times without an offset are local
//! time, which is UTC here), RFC 2822 / `toUTCString()`, and the platform's
//! own `toString()` output. Anything else is an invalid date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use chronoshim_core::date::DateValue;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

pub(crate) fn parse_date_text(text: &str) -> DateValue {
    let text = text.trim();
    if text.is_empty() {
        return DateValue::INVALID;
    }

    parse_iso_date(text)
        .or_else(|| parse_iso_date_time(text))
        .or_else(|| DateTime::parse_from_rfc2822(text).ok().map(|at| at.with_timezone(&Utc)))
        .or_else(|| parse_platform_string(text))
        .map_or(DateValue::INVALID, DateValue::from_datetime)
}

/// `YYYY`, `YYYY-MM` and `YYYY-MM-DD`, all at UTC midnight.
fn parse_iso_date(text: &str) -> Option<DateTime<Utc>> {
    let expanded = match text.len() {
        4 => format!("{text}-01-01"),
        7 => format!("{text}-01"),
        10 => text.to_owned(),
        _ => return None,
    };
    let date = NaiveDate::parse_from_str(&expanded, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn parse_iso_date_time(text: &str) -> Option<DateTime<Utc>> {
    if let Some(utc) = text.strip_suffix('Z') {
        return parse_naive(utc).map(|naive| naive.and_utc());
    }
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        .map(|at| at.with_timezone(&Utc))
        .or_else(|| parse_naive(text).map(|naive| naive.and_utc()))
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// `Tue Nov 14 2023 22:13:20 GMT+0000 (Coordinated Universal Time)`; the
/// parenthesised zone name is optional.
fn parse_platform_string(text: &str) -> Option<DateTime<Utc>> {
    let without_zone_name = match text.find(" (") {
        Some(idx) if text.ends_with(')') => &text[..idx],
        _ => text,
    };
    DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z")
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
