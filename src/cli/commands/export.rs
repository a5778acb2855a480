use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{Outcome, PlannerCommand};
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{info, warning};

/// Handle `export` and `import`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Export { file, force } => {
            let session = Session::open(cfg)?;
            let path =
                ExportLogic::export(&session.planner, file.as_deref(), &cfg.export_dir, *force)?;
            ttlog_or_warn(
                &session.pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} days exported", session.planner.schedule.len()),
            );
        }
        Commands::Import { file } => {
            // Read and parse before touching the store: a bad file changes nothing.
            let doc = ExportLogic::read_import(file)?;
            let mut session = Session::open(cfg)?;
            let outcome = session.apply(PlannerCommand::Import(doc), file)?;

            ExportLogic::notify_import(file);
            info(&outcome);
            if let Outcome::Imported {
                date_ignored: true, ..
            } = outcome
            {
                warning("currentDate in the file is unreadable; the current date was kept.");
            }
        }
        _ => {}
    }
    Ok(())
}
