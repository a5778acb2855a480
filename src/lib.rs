//! rWeekplan library root.
//! Exposes the CLI parser, the high-level run() function and the planner core.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let colors = cfg.show_colors && !cli.no_color;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, colors),
        Commands::Toggle { .. } | Commands::Set { .. } | Commands::Block { .. } => {
            cli::commands::slot::handle(&cli.command, cfg)
        }
        Commands::Auto { .. } => cli::commands::auto::handle(&cli.command, cfg),
        Commands::Show { .. } | Commands::Clear | Commands::Nav { .. } | Commands::Stats => {
            cli::commands::week::handle(&cli.command, cfg, colors)
        }
        Commands::Export { .. } | Commands::Import { .. } => {
            cli::commands::export::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
