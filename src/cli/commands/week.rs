use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{Planner, PlannerCommand};
use crate::errors::{AppError, AppResult};
use crate::ui::grid::{render_header, render_stats, render_week};
use crate::ui::messages::{header, info, success};
use crate::utils::date;

/// Handle `show`, `clear`, `nav` and `stats`.
pub fn handle(cmd: &Commands, cfg: &Config, colors: bool) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match cmd {
        Commands::Show { date: target } => {
            // a given date is only looked at, the stored reference date stays
            let view = match target {
                Some(d) => {
                    let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                    Planner::new(session.planner.schedule.clone(), d)?
                }
                None => session.planner.clone(),
            };
            print_week(&view, colors);
            println!();
            print!("{}", render_stats(&view.schedule.tally(&view.week()), colors));
        }
        Commands::Stats => {
            let tally = session.planner.schedule.tally(&session.planner.week());
            header(render_header(&session.planner));
            print!("{}", render_stats(&tally, colors));
        }
        Commands::Clear => {
            let outcome = session.apply(PlannerCommand::ClearWeek, "week")?;
            success(outcome);
        }
        Commands::Nav {
            weeks,
            months,
            today,
            date: target,
        } => {
            let mut commands = Vec::new();
            if *today {
                commands.push(PlannerCommand::GoTo(date::today()));
            }
            if let Some(d) = target {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                commands.push(PlannerCommand::GoTo(d));
            }
            if let Some(n) = weeks {
                commands.push(PlannerCommand::ShiftWeeks(*n));
            }
            if let Some(n) = months {
                commands.push(PlannerCommand::ShiftMonths(*n));
            }

            if commands.is_empty() {
                info(format!("Current date: {}", session.planner.reference_date()));
            }
            for command in commands {
                let outcome = session.apply(command, "reference date")?;
                success(outcome);
            }
            print_week(&session.planner, colors);
        }
        _ => {}
    }

    Ok(())
}

fn print_week(planner: &Planner, colors: bool) {
    header(render_header(planner));
    print!("{}", render_week(planner, colors));
}
