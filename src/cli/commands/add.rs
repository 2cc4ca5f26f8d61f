use crate::cli::commands::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::EntryForm;
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::date;
use crate::utils::time::{format_hours, parse_optional_time};

/// Fill a new-entry form from the arguments and submit it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        location,
        job_number,
        start,
        end,
        notes,
    } = cmd
    {
        //
        // 1. Parse arguments before touching the database
        //
        let day = parse_optional_date(date_arg.as_ref())?.unwrap_or_else(date::today);
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        //
        // 2. Form in "new" state, then the field edits
        //
        let mut form = EntryForm::new(day, cfg.form_defaults()?);
        form.set_location(location.as_str());
        form.set_job_number(job_number.as_str());
        if let Some(t) = start {
            form.set_start_time(t);
        }
        if let Some(t) = end {
            form.set_end_time(t);
        }
        if let Some(n) = notes {
            form.set_notes(n.as_str());
        }

        render::print_form(&form, cfg);

        //
        // 3. Submit
        //
        let mut repo = SqliteRepository::open(&cfg.database)?;
        let outcome = form.submit(&mut repo)?;
        let entry = outcome.entry();

        success(format!(
            "Entry #{} added: {} net on {}.",
            entry.id,
            format_hours(entry.duration_hours_net(cfg.lunch_policy)),
            entry.date_str(&cfg.date_format)
        ));
    }

    Ok(())
}
