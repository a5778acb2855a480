use crate::core::scheduler::Priority;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWeekplan
/// CLI weekly time-blocking planner backed by SQLite
#[derive(Parser)]
#[command(
    name = "rweekplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly time-blocking planner: hourly slots, meal and training auto-fill",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable ANSI colors in rendered output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the current week as a grid, followed by its hour totals
    Show {
        #[arg(long, help = "Show the week containing this date instead (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Cycle one slot: empty → work → sleep → eating → grappling → lifting → empty
    Toggle {
        /// Day (YYYY-MM-DD, today, or a weekday name in the current week)
        day: String,

        /// Hour (0-23 or HH:MM)
        hour: String,
    },

    /// Set one slot to an activity
    Set {
        /// Day (YYYY-MM-DD, today, or a weekday name in the current week)
        day: String,

        /// Hour (0-23 or HH:MM)
        hour: String,

        /// work, sleep, eating, grappling, lifting, or empty
        activity: String,
    },

    /// Fill a range of hours on one day (defaults to a work block)
    Block {
        /// Day (YYYY-MM-DD, today, or a weekday name in the current week)
        day: String,

        #[arg(long = "from", help = "First hour of the block (HH:MM)")]
        from: String,

        #[arg(long = "to", help = "End of the block, exclusive (HH:MM, 24:00 allowed)")]
        to: String,

        #[arg(long = "activity", default_value = "work")]
        activity: String,
    },

    /// Auto-fill meals and training sessions into the free slots of the current week
    Auto {
        #[arg(long, value_enum, help = "Training priority (default from config)")]
        priority: Option<Priority>,

        #[arg(
            long = "session",
            value_name = "MINUTES",
            help = "Session length in minutes, truncated to whole hours (default from config)"
        )]
        session: Option<u32>,
    },

    /// Reset the current week to the default sleep layout
    Clear,

    /// Move the current week
    Nav {
        #[arg(long, allow_negative_numbers = true, help = "Move by N weeks")]
        weeks: Option<i32>,

        #[arg(long, allow_negative_numbers = true, help = "Move by N months")]
        months: Option<i32>,

        #[arg(long, conflicts_with_all = ["weeks", "months", "date"], help = "Jump to today")]
        today: bool,

        #[arg(long, conflicts_with_all = ["weeks", "months"], help = "Jump to a date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Hour totals per activity for the current week
    Stats,

    /// Export the whole schedule to a JSON file
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: training-schedule-<today>.json)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace the schedule with the content of an exported JSON file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}
