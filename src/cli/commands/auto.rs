use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{Outcome, PlannerCommand};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Auto { priority, session } = cmd {
        let priority = priority.unwrap_or(cfg.default_priority);
        let session_minutes = session.unwrap_or(cfg.default_session_minutes);

        let mut s = Session::open(cfg)?;
        let outcome = s.apply(
            PlannerCommand::RunAutoSchedule {
                priority,
                session_minutes,
            },
            priority.as_str(),
        )?;

        success(format!("Auto schedule ({priority}): {outcome}"));

        if let Outcome::Scheduled(report) = outcome
            && (report.grappling < report.quota.grappling || report.lifting < report.quota.lifting)
        {
            warning("Not enough free slots for the full training quota this week.");
        }
    }
    Ok(())
}
