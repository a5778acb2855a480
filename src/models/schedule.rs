//! Slot model: every known date owns a full day of 24 hourly slots.

use super::activity::Activity;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: usize = 24;

/// Hours booked as sleep on a freshly initialized day: 23:00 and 00:00-06:00.
pub const DEFAULT_SLEEP_HOURS: [u32; 8] = [23, 0, 1, 2, 3, 4, 5, 6];

pub type DaySlots = [Activity; HOURS_PER_DAY];

/// Loose on-disk shape: date → hour → label, exactly as stored in JSON.
pub type RawSchedule = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: BTreeMap<NaiveDate, DaySlots>,
}

/// Hour totals per activity over a set of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub free: u32,
    pub work: u32,
    pub sleep: u32,
    pub eating: u32,
    pub grappling: u32,
    pub lifting: u32,
}

impl Tally {
    fn add(&mut self, activity: Activity) {
        match activity {
            Activity::Empty => self.free += 1,
            Activity::Work => self.work += 1,
            Activity::Sleep => self.sleep += 1,
            Activity::Eating => self.eating += 1,
            Activity::Grappling => self.grappling += 1,
            Activity::Lifting => self.lifting += 1,
        }
    }

    pub fn get(&self, activity: Activity) -> u32 {
        match activity {
            Activity::Empty => self.free,
            Activity::Work => self.work,
            Activity::Sleep => self.sleep,
            Activity::Eating => self.eating,
            Activity::Grappling => self.grappling,
            Activity::Lifting => self.lifting,
        }
    }
}

/// A day with nothing booked except the default sleep block.
pub fn fresh_day() -> DaySlots {
    let mut day = [Activity::Empty; HOURS_PER_DAY];
    for h in DEFAULT_SLEEP_HOURS {
        day[h as usize] = Activity::Sleep;
    }
    day
}

fn check_hour(hour: u32) -> AppResult<usize> {
    if (hour as usize) < HOURS_PER_DAY {
        Ok(hour as usize)
    } else {
        Err(AppError::InvalidHour(hour))
    }
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of dates with a day entry.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn contains_day(&self, date: &NaiveDate) -> bool {
        self.days.contains_key(date)
    }

    /// Create the day with its default sleep block. No-op when it already exists.
    pub fn init_day(&mut self, date: NaiveDate) {
        self.days.entry(date).or_insert_with(fresh_day);
    }

    /// Never fails: unknown days and out-of-range hours read as `Empty`.
    pub fn get_activity(&self, date: &NaiveDate, hour: u32) -> Activity {
        self.days
            .get(date)
            .and_then(|day| day.get(hour as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn set_activity(&mut self, date: NaiveDate, hour: u32, activity: Activity) -> AppResult<()> {
        let h = check_hour(hour)?;
        self.day_mut(date)[h] = activity;
        Ok(())
    }

    /// Advance one slot along `Activity::CYCLE` and return the new value.
    pub fn cycle_activity(&mut self, date: NaiveDate, hour: u32) -> AppResult<Activity> {
        let h = check_hour(hour)?;
        let slot = &mut self.day_mut(date)[h];
        *slot = slot.next();
        Ok(*slot)
    }

    /// Reset every given day to the `init_day` layout, overwriting whatever was there.
    pub fn clear_week(&mut self, dates: &[NaiveDate]) {
        for date in dates {
            self.days.insert(*date, fresh_day());
        }
    }

    /// Fill `[start, end)` with `activity`.
    pub fn set_block(
        &mut self,
        date: NaiveDate,
        start: u32,
        end: u32,
        activity: Activity,
    ) -> AppResult<()> {
        if start >= end || end as usize > HOURS_PER_DAY {
            return Err(AppError::InvalidBlock { start, end });
        }
        let day = self.day_mut(date);
        for slot in &mut day[start as usize..end as usize] {
            *slot = activity;
        }
        Ok(())
    }

    pub fn tally(&self, dates: &[NaiveDate]) -> Tally {
        let mut tally = Tally::default();
        for day in dates.iter().filter_map(|d| self.days.get(d)) {
            for activity in day {
                tally.add(*activity);
            }
        }
        tally
    }

    /// Day entry for `date`, created all-empty (no sleep block) when missing.
    pub(crate) fn day_mut(&mut self, date: NaiveDate) -> &mut DaySlots {
        self.days
            .entry(date)
            .or_insert([Activity::Empty; HOURS_PER_DAY])
    }

    /// Decode the loose JSON shape.
    ///
    /// - day keys that are not `YYYY-MM-DD` are skipped
    /// - hour keys outside `0..=23` are skipped
    /// - missing hours read as `Empty`
    /// - unknown or non-string labels read as `Empty`
    ///
    /// Returns the schedule and the number of skipped keys.
    pub fn from_raw(raw: RawSchedule) -> (Self, usize) {
        let mut schedule = Self::new();
        let mut skipped = 0;

        for (date_key, hours) in raw {
            let Ok(date) = NaiveDate::parse_from_str(&date_key, "%Y-%m-%d") else {
                skipped += 1;
                continue;
            };

            let day = schedule.day_mut(date);
            for (hour_key, value) in hours {
                let Some(h) = hour_key
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|h| *h < HOURS_PER_DAY)
                else {
                    skipped += 1;
                    continue;
                };

                day[h] = value
                    .as_str()
                    .and_then(Activity::from_db_str)
                    .unwrap_or_default();
            }
        }

        (schedule, skipped)
    }
}

struct DayRef<'a>(&'a DaySlots);

impl Serialize for DayRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS_PER_DAY))?;
        for (hour, activity) in self.0.iter().enumerate() {
            map.serialize_entry(&hour.to_string(), activity)?;
        }
        map.end()
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (date, day) in &self.days {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), &DayRef(day))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeekSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSchedule::deserialize(deserializer)?;
        Ok(Self::from_raw(raw).0)
    }
}
