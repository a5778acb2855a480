//! Planner state and the commands that mutate it.
//!
//! Every CLI action is turned into a `PlannerCommand` and applied here, so the
//! slot model never sees the presentation layer.

use crate::core::scheduler::{self, Priority, ScheduleReport};
use crate::core::week::{self, Week};
use crate::errors::{AppError, AppResult};
use crate::export::model::ImportFile;
use crate::models::activity::Activity;
use crate::models::schedule::WeekSchedule;
use crate::utils::date;
use crate::utils::time::format_hour;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerCommand {
    CycleSlot {
        date: NaiveDate,
        hour: u32,
    },
    SetSlot {
        date: NaiveDate,
        hour: u32,
        activity: Activity,
    },
    SetBlock {
        date: NaiveDate,
        start: u32,
        end: u32,
        activity: Activity,
    },
    RunAutoSchedule {
        priority: Priority,
        session_minutes: u32,
    },
    ClearWeek,
    ShiftWeeks(i32),
    ShiftMonths(i32),
    GoTo(NaiveDate),
    Import(ImportFile),
}

impl PlannerCommand {
    /// Operation name written to the internal log.
    pub fn operation(&self) -> &'static str {
        match self {
            PlannerCommand::CycleSlot { .. } => "toggle",
            PlannerCommand::SetSlot { .. } => "set",
            PlannerCommand::SetBlock { .. } => "block",
            PlannerCommand::RunAutoSchedule { .. } => "auto",
            PlannerCommand::ClearWeek => "clear",
            PlannerCommand::ShiftWeeks(_)
            | PlannerCommand::ShiftMonths(_)
            | PlannerCommand::GoTo(_) => "nav",
            PlannerCommand::Import(_) => "import",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Slot {
        date: NaiveDate,
        hour: u32,
        activity: Activity,
    },
    Block {
        date: NaiveDate,
        start: u32,
        end: u32,
        activity: Activity,
    },
    Scheduled(ScheduleReport),
    Cleared(Week),
    Moved {
        from: NaiveDate,
        to: NaiveDate,
    },
    Imported {
        days: usize,
        skipped: usize,
        reference_date: NaiveDate,
        /// `currentDate` was present but unreadable, so the old reference date was kept.
        date_ignored: bool,
    },
}

fn slot_name(activity: Activity) -> &'static str {
    if activity.is_empty() { "empty" } else { activity.to_db_str() }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Slot {
                date,
                hour,
                activity,
            } => write!(f, "{date} {} → {}", format_hour(*hour), slot_name(*activity)),
            Outcome::Block {
                date,
                start,
                end,
                activity,
            } => write!(
                f,
                "{date} {}-{} → {}",
                format_hour(*start),
                format_hour(*end),
                slot_name(*activity)
            ),
            Outcome::Scheduled(r) => write!(
                f,
                "{} meals, grappling {}/{}, lifting {}/{} ({}h sessions)",
                r.meals, r.grappling, r.quota.grappling, r.lifting, r.quota.lifting, r.session_hours
            ),
            Outcome::Cleared(week) => write!(f, "cleared {} to {}", week[0], week[week.len() - 1]),
            Outcome::Moved { from, to } => write!(f, "{from} → {to}"),
            Outcome::Imported {
                days,
                skipped,
                reference_date,
                ..
            } => write!(
                f,
                "{days} days imported ({skipped} entries skipped), current date {reference_date}"
            ),
        }
    }
}

/// The reference date only changes together with its week, so a planner
/// always points at a week that exists in the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
    pub schedule: WeekSchedule,
    reference_date: NaiveDate,
    week: Week,
}

impl Planner {
    /// Planner positioned on `reference_date` with its week initialized.
    pub fn new(schedule: WeekSchedule, reference_date: NaiveDate) -> AppResult<Self> {
        let mut planner = Self {
            schedule,
            reference_date,
            week: week::week_of(reference_date)?,
        };
        planner.ensure_week();
        Ok(planner)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn week(&self) -> Week {
        self.week
    }

    /// Give every day of the current week its default layout if it has none yet.
    pub fn ensure_week(&mut self) {
        for date in self.week() {
            self.schedule.init_day(date);
        }
    }

    pub fn apply(&mut self, command: PlannerCommand) -> AppResult<Outcome> {
        let outcome = match command {
            PlannerCommand::CycleSlot { date, hour } => {
                let activity = self.schedule.cycle_activity(date, hour)?;
                Outcome::Slot {
                    date,
                    hour,
                    activity,
                }
            }
            PlannerCommand::SetSlot {
                date,
                hour,
                activity,
            } => {
                self.schedule.set_activity(date, hour, activity)?;
                Outcome::Slot {
                    date,
                    hour,
                    activity,
                }
            }
            PlannerCommand::SetBlock {
                date,
                start,
                end,
                activity,
            } => {
                self.schedule.set_block(date, start, end, activity)?;
                Outcome::Block {
                    date,
                    start,
                    end,
                    activity,
                }
            }
            PlannerCommand::RunAutoSchedule {
                priority,
                session_minutes,
            } => {
                let week = self.week();
                let report =
                    scheduler::auto_schedule(&mut self.schedule, &week, priority, session_minutes)?;
                Outcome::Scheduled(report)
            }
            PlannerCommand::ClearWeek => {
                let week = self.week();
                self.schedule.clear_week(&week);
                Outcome::Cleared(week)
            }
            PlannerCommand::ShiftWeeks(n) => {
                self.move_to(week::shift_weeks(self.reference_date, n)?)?
            }
            PlannerCommand::ShiftMonths(n) => {
                self.move_to(week::shift_months(self.reference_date, n)?)?
            }
            PlannerCommand::GoTo(date) => self.move_to(date)?,
            PlannerCommand::Import(file) => self.import(file)?,
        };

        self.ensure_week();
        Ok(outcome)
    }

    fn move_to(&mut self, to: NaiveDate) -> AppResult<Outcome> {
        let week = week::week_of(to)?;
        let from = self.reference_date;
        self.reference_date = to;
        self.week = week;
        Ok(Outcome::Moved { from, to })
    }

    /// Replace the schedule wholesale. Rejected without touching state when
    /// the file has no `schedule`.
    fn import(&mut self, file: ImportFile) -> AppResult<Outcome> {
        let raw = file
            .schedule
            .ok_or_else(|| AppError::Import("Invalid schedule file format".to_string()))?;

        let (schedule, skipped) = WeekSchedule::from_raw(raw);

        // absent or null keeps the date silently; anything unusable is reported
        let target = file.current_date.as_ref().map(|value| {
            value
                .as_str()
                .and_then(date::parse_reference_date)
                .and_then(|d| week::week_of(d).ok().map(|w| (d, w)))
        });
        let date_ignored = matches!(target, Some(None));

        let days = schedule.len();
        self.schedule = schedule;
        if let Some(Some((d, w))) = target {
            self.reference_date = d;
            self.week = w;
        }

        Ok(Outcome::Imported {
            days,
            skipped,
            reference_date: self.reference_date,
            date_ignored,
        })
    }
}
