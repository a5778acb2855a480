use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::PlannerCommand;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::ui::messages::success;
use crate::utils::time::{parse_end_hour, parse_hour};

fn parse_activity(s: &str) -> AppResult<Activity> {
    Activity::from_cli_str(s).ok_or_else(|| AppError::InvalidActivity(s.to_string()))
}

/// Handle `toggle`, `set` and `block`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    let (command, target) = match cmd {
        Commands::Toggle { day, hour } => {
            let date = session.day(day)?;
            let hour = parse_hour(hour)?;
            (PlannerCommand::CycleSlot { date, hour }, date.to_string())
        }
        Commands::Set {
            day,
            hour,
            activity,
        } => {
            let date = session.day(day)?;
            let hour = parse_hour(hour)?;
            let activity = parse_activity(activity)?;
            (
                PlannerCommand::SetSlot {
                    date,
                    hour,
                    activity,
                },
                date.to_string(),
            )
        }
        Commands::Block {
            day,
            from,
            to,
            activity,
        } => {
            let date = session.day(day)?;
            let start = parse_hour(from)?;
            let end = parse_end_hour(to)?;
            let activity = parse_activity(activity)?;
            (
                PlannerCommand::SetBlock {
                    date,
                    start,
                    end,
                    activity,
                },
                date.to_string(),
            )
        }
        _ => return Ok(()),
    };

    let outcome = session.apply(command, &target)?;
    success(outcome);
    Ok(())
}
