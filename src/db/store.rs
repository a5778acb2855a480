//! Key-value persistence of the planner state.
//!
//! Two keys are kept: the JSON schedule and the reference date. Loading is
//! best effort: anything missing or unreadable falls back to an empty
//! schedule and today's date.

use crate::core::planner::Planner;
use crate::core::week::week_of;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::schedule::WeekSchedule;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, params};

pub const SCHEDULE_KEY: &str = "trainingSchedule";
pub const CURRENT_DATE_KEY: &str = "currentDate";

pub fn get_value(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Insert or replace one key. Takes a `Connection` so a `Transaction` works too.
fn upsert(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}

pub fn set_value(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    upsert(&pool.conn, key, value)
}

fn load_schedule(pool: &DbPool) -> WeekSchedule {
    match get_value(pool, SCHEDULE_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<WeekSchedule>(&json) {
            Ok(schedule) => schedule,
            Err(e) => {
                warning(format!("Stored schedule is unreadable, starting empty: {e}"));
                WeekSchedule::new()
            }
        },
        Ok(None) => WeekSchedule::new(),
        Err(e) => {
            warning(format!("Failed to load schedule: {e}"));
            WeekSchedule::new()
        }
    }
}

fn load_reference_date(pool: &DbPool) -> NaiveDate {
    match get_value(pool, CURRENT_DATE_KEY) {
        Ok(Some(raw)) => date::parse_reference_date(&raw)
            .filter(|d| week_of(*d).is_ok())
            .unwrap_or_else(|| {
                warning(format!("Stored date '{raw}' is unreadable, using today"));
                date::today()
            }),
        Ok(None) => date::today(),
        Err(e) => {
            warning(format!("Failed to load current date: {e}"));
            date::today()
        }
    }
}

/// Restore the planner. Missing or unreadable stored values fall back to
/// defaults, so the stored data itself never makes this fail.
pub fn load_state(pool: &DbPool) -> AppResult<Planner> {
    Planner::new(load_schedule(pool), load_reference_date(pool))
}

/// Persist schedule and reference date together.
pub fn save_state(pool: &mut DbPool, planner: &Planner) -> AppResult<()> {
    let schedule = serde_json::to_string(&planner.schedule)?;
    let current = date::format_reference_date(planner.reference_date());

    let tx = pool.conn.transaction()?;
    upsert(&tx, SCHEDULE_KEY, &schedule)?;
    upsert(&tx, CURRENT_DATE_KEY, &current)?;
    tx.commit()?;
    Ok(())
}
