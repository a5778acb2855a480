use crate::core::week::{Week, weekday_index};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts a full ISO-8601 timestamp or a bare `YYYY-MM-DD`.
///
/// The calendar date is taken as written in the string: no conversion to the
/// local zone happens.
pub fn parse_reference_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    parse_date(s)
}

/// Midnight UTC of the date, millisecond precision ("2024-01-01T00:00:00.000Z").
pub fn format_reference_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Resolve a CLI day argument: `YYYY-MM-DD`, `today`, or a weekday name
/// (`mon`, `tuesday`, ...) inside the given week.
pub fn resolve_day(s: &str, week: &Week) -> Option<NaiveDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    if let Some(d) = parse_date(s) {
        return Some(d);
    }
    s.parse::<Weekday>()
        .ok()
        .map(|wd| week[weekday_index(wd)])
}
