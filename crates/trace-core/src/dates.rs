//! Harvest date parsing and `YYYY-MM-DD` normalization.
//!
//! Inbound dates arrive as free text from a form. Anything that carries a
//! time zone is converted to UTC before the calendar date is taken, so
//! `2024-07-21T23:30:00-02:00` normalizes to `2024-07-22`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Canonical wire format for harvest dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar-only layouts tried after the canonical one.
const DATE_LAYOUTS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Date-time layouts without an offset; interpreted as UTC.
const NAIVE_DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// No date was supplied.
    #[error("harvest date is missing")]
    Missing,

    /// The text could not be read as a date in any accepted layout.
    #[error("unrecognized date '{0}'")]
    Unparseable(String),
}

/// Parse a user-entered date in any accepted layout.
///
/// # Errors
///
/// Returns [`DateError::Missing`] for blank input and
/// [`DateError::Unparseable`] when no layout matches.
pub fn parse_harvest_date(raw: &str) -> Result<NaiveDate, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateError::Missing);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(moment) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(moment.with_timezone(&Utc).date_naive());
    }

    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(moment) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(moment.and_utc().date_naive());
        }
    }

    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| DateError::Unparseable(trimmed.to_string()))
}

/// Render a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse and re-render a date as `YYYY-MM-DD`.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
///
/// # Errors
///
/// See [`parse_harvest_date`].
pub fn normalize_harvest_date(raw: &str) -> Result<String, DateError> {
    parse_harvest_date(raw).map(format_iso)
}

/// Strict check used by the offline validator: exactly `YYYY-MM-DD` and a
/// real calendar day.
#[must_use]
pub fn is_strict_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
        && NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).is_ok()
}
