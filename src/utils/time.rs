//! Hour parsing: "HH:MM" (minutes ignored) or a bare hour.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Hour of day from "HH:MM" or "H". Validates 0-23 for a slot.
pub fn parse_hour(s: &str) -> AppResult<u32> {
    if let Some(t) = parse_time(s) {
        return Ok(t.hour());
    }
    let hour: u32 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    if hour > 23 {
        return Err(AppError::InvalidHour(hour));
    }
    Ok(hour)
}

/// Block end bound: like `parse_hour` but also accepts "24:00"/"24" as end of day.
pub fn parse_end_hour(s: &str) -> AppResult<u32> {
    match s.trim() {
        "24" | "24:00" => Ok(24),
        other => parse_hour(other),
    }
}

/// "07:00"
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}
