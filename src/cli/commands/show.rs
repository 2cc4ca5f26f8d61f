use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntryRepository, SqliteRepository};
use crate::errors::{AppError, AppResult};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let repo = SqliteRepository::open(&cfg.database)?;
        let entry = repo.find_one(*id)?.ok_or(AppError::EntryNotFound(*id))?;
        print!("{}", render::entry_view(&entry, cfg));
    }
    Ok(())
}
