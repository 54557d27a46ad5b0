//! Spanish long-form date rendering.
//!
//! # Invariants
//! - Date-only input is parsed as a naive calendar date; the rendered day is
//!   never shifted by a timezone conversion.
//! - Unparseable input renders `INVALID_DATE` instead of failing.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime};

/// Marker rendered for input that is not a calendar date.
pub const INVALID_DATE: &str = "Invalid Date";
/// Right-hand side of a range without an end date.
pub const PRESENT_LABEL: &str = "Presente";
/// Separator between the two sides of a date range.
pub const RANGE_SEPARATOR: &str = " - ";

const LONG_DATE_FORMAT: &str = "%-d de %B de %Y";
const LOCALE: Locale = Locale::es_ES;
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses `YYYY-MM-DD`, date-times, `YYYY-MM` or `YYYY` into a calendar date.
///
/// Date-times keep the date as written, in their own offset when they carry
/// one. `YYYY-MM` and `YYYY` resolve to the first day of the period.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.date_naive());
    }
    if let Some(date) = parse_naive_date_time(trimmed) {
        return Some(date);
    }
    let padded = if trimmed.len() == 4 {
        format!("{trimmed}-01-01")
    } else {
        format!("{trimmed}-01")
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

fn parse_naive_date_time(value: &str) -> Option<NaiveDate> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
}

/// Renders a date string as e.g. `15 de septiembre de 2025`.
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => format_calendar_date(date),
        None => INVALID_DATE.to_string(),
    }
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(LONG_DATE_FORMAT, LOCALE)
        .to_string()
}

/// Renders `"{start} - {end}"`, or `"{start} - Presente"` when `end` is absent
/// or blank.
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let start = format_date(start);
    match end.filter(|end| !end.trim().is_empty()) {
        Some(end) => format!("{start}{RANGE_SEPARATOR}{}", format_date(end)),
        None => format!("{start}{RANGE_SEPARATOR}{PRESENT_LABEL}"),
    }
}
