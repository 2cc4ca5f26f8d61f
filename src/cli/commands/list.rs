use crate::cli::commands::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EntryFilter;
use crate::core::list::ListLogic;
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search, date } = cmd {
        let date = parse_optional_date(date.as_ref())?;

        let repo = SqliteRepository::open(&cfg.database)?;
        let mut list = ListLogic::load(&repo, cfg.lunch_policy)?;
        list.set_filter(EntryFilter::new(search.clone().unwrap_or_default(), date));

        render::print_list(&list, cfg);
    }
    Ok(())
}
