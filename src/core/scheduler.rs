//! Greedy first-fit auto-fill of meals and training sessions for one week.
//!
//! The run is a pure function of the week's current slots: generated
//! activities (eating, grappling, lifting) are wiped first, so running it
//! twice with the same inputs yields the same schedule.

use crate::core::week::{DAYS_PER_WEEK, Week};
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::schedule::{DaySlots, WeekSchedule};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MEAL_HOURS: [u32; 3] = [7, 12, 18];

/// Start hours tried in order: evening first, then morning, then afternoon.
pub const PREFERRED_START_HOURS: [u32; 8] = [19, 20, 17, 18, 10, 11, 15, 16];

/// Sessions must be over by 22:00.
pub const LATEST_END_HOUR: u32 = 22;

/// Lifting for day `i` is booked on day `(i + LIFTING_DAY_OFFSET) % 7`.
pub const LIFTING_DAY_OFFSET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Balanced,
    Grappling,
    Lifting,
}

impl Priority {
    /// Number of (grappling, lifting) sessions wanted for the week.
    pub fn quota(&self) -> Quota {
        match self {
            Priority::Balanced => Quota { grappling: 3, lifting: 3 },
            Priority::Grappling => Quota { grappling: 4, lifting: 2 },
            Priority::Lifting => Quota { grappling: 2, lifting: 4 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Balanced => "balanced",
            Priority::Grappling => "grappling",
            Priority::Lifting => "lifting",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub grappling: u32,
    pub lifting: u32,
}

/// What a run actually placed; sessions can fall short of the quota on a full week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleReport {
    pub quota: Quota,
    pub session_hours: u32,
    pub meals: u32,
    pub grappling: u32,
    pub lifting: u32,
}

/// Whole hours per session; minutes are truncated (90 → 1).
pub fn session_hours(minutes: u32) -> AppResult<u32> {
    match minutes / 60 {
        0 => Err(AppError::InvalidSessionLength(minutes)),
        hours => Ok(hours),
    }
}

/// First preferred start hour whose whole session is free and ends by 22:00.
fn find_start(day: &DaySlots, length: u32) -> Option<u32> {
    PREFERRED_START_HOURS.into_iter().find(|&start| {
        start + length <= LATEST_END_HOUR
            && (start..start + length).all(|h| day[h as usize].is_empty())
    })
}

fn place(day: &mut DaySlots, length: u32, activity: Activity) -> bool {
    match find_start(day, length) {
        Some(start) => {
            for h in start..start + length {
                day[h as usize] = activity;
            }
            true
        }
        None => false,
    }
}

/// Fill `week` in `schedule` with meals and training sessions.
///
/// Days of the week missing from the schedule are initialized first.
pub fn auto_schedule(
    schedule: &mut WeekSchedule,
    week: &Week,
    priority: Priority,
    session_minutes: u32,
) -> AppResult<ScheduleReport> {
    let length = session_hours(session_minutes)?;
    let quota = priority.quota();

    for date in week {
        schedule.init_day(*date);
    }

    // reset
    for date in week {
        for slot in schedule.day_mut(*date).iter_mut() {
            if slot.is_generated() {
                *slot = Activity::Empty;
            }
        }
    }

    // meals
    let mut meals = 0;
    for date in week {
        let day = schedule.day_mut(*date);
        for h in MEAL_HOURS {
            let slot = &mut day[h as usize];
            if slot.is_empty() {
                *slot = Activity::Eating;
                meals += 1;
            }
        }
    }

    // training: one grappling attempt on day i, then one lifting attempt on day i+3
    let mut grappling = 0;
    let mut lifting = 0;
    for (idx, date) in week.iter().enumerate() {
        if grappling < quota.grappling && place(schedule.day_mut(*date), length, Activity::Grappling)
        {
            grappling += 1;
        }

        if idx > 0 && lifting < quota.lifting {
            let target = week[(idx + LIFTING_DAY_OFFSET) % DAYS_PER_WEEK];
            if place(schedule.day_mut(target), length, Activity::Lifting) {
                lifting += 1;
            }
        }
    }

    Ok(ScheduleReport {
        quota,
        session_hours: length,
        meals,
        grappling,
        lifting,
    })
}
