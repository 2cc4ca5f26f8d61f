use crate::cli::commands::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::EntryForm;
use crate::db::{EntryRepository, SqliteRepository};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::time::{format_hours, parse_optional_time};

/// Load an entry into the form, apply the given field edits and save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        location,
        job_number,
        start,
        end,
        notes,
        clear_notes,
    } = cmd
    {
        let date = parse_optional_date(date.as_ref())?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let mut repo = SqliteRepository::open(&cfg.database)?;
        let entry = repo.find_one(*id)?.ok_or(AppError::EntryNotFound(*id))?;

        let mut form = EntryForm::edit(&entry);
        if let Some(d) = date {
            form.set_date(d);
        }
        if let Some(l) = location {
            form.set_location(l.as_str());
        }
        if let Some(j) = job_number {
            form.set_job_number(j.as_str());
        }
        if let Some(t) = start {
            form.set_start_time(t);
        }
        if let Some(t) = end {
            form.set_end_time(t);
        }
        if *clear_notes {
            form.set_notes("");
        } else if let Some(n) = notes {
            form.set_notes(n.as_str());
        }

        render::print_form(&form, cfg);

        let outcome = form.submit(&mut repo)?;
        let saved = outcome.entry();

        success(format!(
            "Entry #{} saved: {} net on {}.",
            saved.id,
            format_hours(saved.duration_hours_net(cfg.lunch_policy)),
            saved.date_str(&cfg.date_format)
        ));
    }

    Ok(())
}
