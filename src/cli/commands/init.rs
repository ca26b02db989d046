use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_file = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_file.to_string_lossy().to_string();

    println!("⚙️  Initializing rHOSlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {db_path}");

    // opening the pool creates the schema
    let pool = DbPool::new(&db_path)?;

    success(format!("Database initialized at {db_path}"));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    Ok(())
}
