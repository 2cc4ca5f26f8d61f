use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom_db = cli
        .db
        .as_deref()
        .map(|p| expand_tilde(p).to_string_lossy().to_string());

    println!("⚙️  Initializing rShiftlog…");

    let cfg = Config::init_all(custom_db.as_deref(), cli.test)?;

    SqliteRepository::open(&cfg.database)?;

    println!("✅ Database initialized at {}", &cfg.database);
    println!("🎉 rShiftlog initialization completed!");
    Ok(())
}
