//! Week arithmetic over local wall-clock dates (Monday-first weeks).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

pub type Week = [NaiveDate; DAYS_PER_WEEK];

/// The Monday-to-Sunday week containing `date`.
///
/// Fails only at the edges of the calendar, when the Monday or the Sunday
/// is not a representable date.
pub fn week_of(date: NaiveDate) -> AppResult<Week> {
    let out_of_range = || AppError::InvalidDate(format!("no full week around {date}"));

    // Sunday = 0 numbering: a Sunday belongs to the week that started six days earlier.
    let dow = date.weekday().num_days_from_sunday() as i64;
    let offset = -dow + if dow == 0 { -6 } else { 1 };
    let monday = date
        .checked_add_signed(Duration::days(offset))
        .ok_or_else(out_of_range)?;
    monday
        .checked_add_days(Days::new((DAYS_PER_WEEK - 1) as u64))
        .ok_or_else(out_of_range)?;

    Ok(std::array::from_fn(|i| monday + Days::new(i as u64)))
}

pub fn shift_weeks(date: NaiveDate, n: i32) -> AppResult<NaiveDate> {
    let days = Days::new(7 * n.unsigned_abs() as u64);
    let shifted = if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or_else(|| AppError::InvalidDate(format!("{date} shifted by {n} weeks")))
}

/// Move `date` by `n` months keeping the day of month; an overflowing day
/// rolls into the following month (Jan 31 + 1 month → Mar 2 or Mar 3).
pub fn shift_months(date: NaiveDate, n: i32) -> AppResult<NaiveDate> {
    let out_of_range = || AppError::InvalidDate(format!("{date} shifted by {n} months"));

    let total = date.year() as i64 * 12 + date.month0() as i64 + n as i64;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = total.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(date.day0() as u64)))
        .ok_or_else(out_of_range)
}

/// "October 2026"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Week of Oct 12-18"
pub fn week_label(week: &Week) -> String {
    let (start, end) = (week[0], week[DAYS_PER_WEEK - 1]);
    format!("Week of {} {}-{}", start.format("%b"), start.day(), end.day())
}

/// Column header for a day: "Mon 12/10"
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}/{}", date.format("%a"), date.day(), date.month())
}

/// Index of `weekday` inside a Monday-first week.
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
