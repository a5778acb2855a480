use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let custom_db = cli.db.as_ref().map(|_| cfg.database.as_str());
    let cfg = Config::init_all(custom_db, cli.test)?;
    let db_path = cfg.database.clone();

    info("Initializing rWeekplan…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", &db_path));

    let pool = DbPool::new(&db_path)?;

    success(format!("Database initialized at {}", &db_path));

    log::ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    Ok(())
}
