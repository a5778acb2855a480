//! Text rendering of the current week: header, 24×7 grid, hour totals.

use crate::core::planner::Planner;
use crate::core::week::{self, Week};
use crate::models::activity::Activity;
use crate::models::schedule::{HOURS_PER_DAY, Tally};
use crate::utils::colors::{BOLD, RESET, color_for_activity};
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::format_hour;

const TIME_WIDTH: usize = 5;
const DAY_WIDTH: usize = 10;

/// "October 2026 · Week of Oct 12-18"
pub fn render_header(planner: &Planner) -> String {
    format!(
        "{} · {}",
        week::month_label(planner.reference_date()),
        week::week_label(&planner.week())
    )
}

pub fn render_week(planner: &Planner, colors: bool) -> String {
    let days: Week = planner.week();

    let mut columns = vec![Column::new("Time", TIME_WIDTH)];
    columns.extend(
        days.iter()
            .map(|d| Column::new(week::day_label(*d), DAY_WIDTH)),
    );
    let mut table = Table::new(columns);

    for hour in 0..HOURS_PER_DAY as u32 {
        let mut row = vec![Cell::plain(format_hour(hour))];
        for date in &days {
            let activity = planner.schedule.get_activity(date, hour);
            let text = if activity.is_empty() { "·" } else { activity.label() };
            row.push(if colors {
                Cell::colored(text, color_for_activity(activity))
            } else {
                Cell::plain(text)
            });
        }
        table.add_row(row);
    }

    table.render()
}

pub fn render_stats(tally: &Tally, colors: bool) -> String {
    let mut out = String::new();
    for activity in [
        Activity::Work,
        Activity::Grappling,
        Activity::Lifting,
        Activity::Sleep,
        Activity::Eating,
    ] {
        let hours = tally.get(activity);
        let name = format!("{:<10}", activity.label());
        if colors {
            out.push_str(&format!(
                "{}{BOLD}{name}{RESET} {hours:>3} h\n",
                color_for_activity(activity)
            ));
        } else {
            out.push_str(&format!("{name} {hours:>3} h\n"));
        }
    }
    out.push_str(&format!("{:<10} {:>3} h\n", "Free", tally.free));
    out
}
