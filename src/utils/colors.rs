//! ANSI color helper utilities for terminal output.

use crate::models::activity::Activity;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Slot color in the weekly grid.
pub fn color_for_activity(activity: Activity) -> &'static str {
    match activity {
        Activity::Empty => GREY,
        Activity::Work => BLUE,
        Activity::Sleep => MAGENTA,
        Activity::Eating => YELLOW,
        Activity::Grappling => RED,
        Activity::Lifting => GREEN,
    }
}
