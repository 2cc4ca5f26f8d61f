use crate::cli::commands::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EntryFilter;
use crate::core::list::ListLogic;
use crate::db::{EntryRepository, SqliteRepository};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_hours;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn describe(entry: &WorkEntry, cfg: &Config) -> String {
    format!(
        "#{} {} {} / {} ({}, {})",
        entry.id,
        entry.date_str(&cfg.date_format),
        entry.location,
        entry.job_number,
        entry.time_range_str(),
        format_hours(entry.duration_hours_net(cfg.lunch_policy))
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        id,
        index,
        search,
        date,
        yes,
    } = cmd
    {
        let date = parse_optional_date(date.as_ref())?;

        let mut repo = SqliteRepository::open(&cfg.database)?;
        let mut list = ListLogic::load(&repo, cfg.lunch_policy)?;
        list.set_filter(EntryFilter::new(search.clone().unwrap_or_default(), date));

        //
        // Resolve the target: by id, or by 1-based position in the filtered list
        //
        let target = match (id, index) {
            (Some(id), _) => repo.find_one(*id)?.ok_or(AppError::EntryNotFound(*id))?,
            (None, Some(pos)) => {
                let idx = pos.checked_sub(1).ok_or(AppError::InvalidIndex(*pos))?;
                list.visible()
                    .get(idx)
                    .map(|e| (*e).clone())
                    .ok_or(AppError::InvalidIndex(*pos))?
            }
            (None, None) => return Err(AppError::Other("missing entry id or --index".into())),
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry {}? This action is irreversible.",
            describe(&target, cfg)
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        match index {
            Some(pos) if id.is_none() => {
                list.delete_visible(&mut repo, pos - 1)?;
            }
            _ => list.delete_by_id(&mut repo, target.id)?,
        }

        success(format!("Entry #{} has been deleted.", target.id));
        info(format!(
            "{} entries left, total {:.2} h.",
            list.visible().len(),
            list.total_net_hours()
        ));
    }

    Ok(())
}
