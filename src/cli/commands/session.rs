//! Per-invocation planner session: open the store, load, apply, save, log.

use crate::config::Config;
use crate::core::planner::{Outcome, Planner, PlannerCommand};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::{load_state, save_state};
use crate::errors::{AppError, AppResult};
use crate::utils::date::resolve_day;
use chrono::NaiveDate;

pub struct Session {
    pub pool: DbPool,
    pub planner: Planner,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        let planner = load_state(&pool)?;
        Ok(Self { pool, planner })
    }

    /// Day argument resolved against the current week.
    pub fn day(&self, token: &str) -> AppResult<NaiveDate> {
        resolve_day(token, &self.planner.week())
            .ok_or_else(|| AppError::InvalidDate(token.to_string()))
    }

    /// Apply `command`, persist the new state and record it in the internal log.
    ///
    /// On error nothing is saved, so the stored state stays as it was.
    pub fn apply(&mut self, command: PlannerCommand, target: &str) -> AppResult<Outcome> {
        let operation = command.operation();
        let outcome = self.planner.apply(command)?;
        save_state(&mut self.pool, &self.planner)?;
        ttlog_or_warn(&self.pool.conn, operation, target, &outcome.to_string());
        Ok(outcome)
    }
}
