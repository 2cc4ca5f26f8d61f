//! Terminal views of the list and the entry form.

use crate::config::Config;
use crate::core::calculator::LunchPolicy;
use crate::core::filter::EntryFilter;
use crate::core::form::EntryForm;
use crate::core::list::ListLogic;
use crate::models::entry::WorkEntry;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, hours2readable};
use ansi_term::{Colour, Style};

const NOTES_WIDTH: usize = 60;

fn describe_filter(filter: &EntryFilter, date_fmt: &str) -> Option<String> {
    let mut parts = Vec::new();
    if !filter.search.is_empty() {
        parts.push(format!("search \"{}\"", filter.search));
    }
    if let Some(d) = filter.date {
        parts.push(format!("date {}", d.format(date_fmt)));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn entry_row(entry: &WorkEntry, cfg: &Config, policy: LunchPolicy) -> (Vec<String>, Vec<String>) {
    let cells = vec![
        entry.id.to_string(),
        entry.date_str(&cfg.date_format),
        entry.location.clone(),
        entry.job_number.clone(),
        entry.time_range_str(),
        format_hours(entry.duration_hours_net(policy)),
    ];

    let details = match &entry.notes {
        Some(n) if entry.has_notes() => textwrap::wrap(n, NOTES_WIDTH)
            .into_iter()
            .map(|l| format!("↳ {}", l))
            .collect(),
        _ => Vec::new(),
    };

    (cells, details)
}

/// Render the list screen: filter line, entries (or the empty placeholder)
/// and the total footer.
pub fn list_view(list: &ListLogic, cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(desc) = describe_filter(list.filter(), &cfg.date_format) {
        out.push_str(&format!("🔎 Filter: {}\n", desc));
    }

    if list.is_empty_view() {
        out.push_str("No entries.\n");
        if list.all().is_empty() {
            out.push_str("Use `rshiftlog add` to log the first shift.\n");
        } else {
            out.push_str("No entry matches the current filter.\n");
        }
        return out;
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Location"),
        Column::left("Job"),
        Column::left("Time"),
        Column::right("Net"),
    ]);

    for entry in list.visible() {
        let (cells, details) = entry_row(entry, cfg, list.policy());
        table.add_row_with_details(cells, details);
    }

    out.push_str(&table.render());
    out.push_str(&format!(
        "\n{}\n",
        Style::new()
            .bold()
            .paint(format!("Total: {:.2} h", list.total_net_hours()))
    ));
    out
}

pub fn print_list(list: &ListLogic, cfg: &Config) {
    header("Work entries");
    print!("{}", list_view(list, cfg));
}

/// Full breakdown of one entry.
pub fn entry_view(entry: &WorkEntry, cfg: &Config) -> String {
    let d = entry.durations(cfg.lunch_policy);
    let mut lines = vec![
        format!("Entry #{}", entry.id),
        format!("Date:       {}", entry.date_str(&cfg.date_format)),
        format!("Location:   {}", entry.location),
        format!("Job number: {}", entry.job_number),
        format!("Time:       {}", entry.time_range_str()),
        format!("Gross:      {}", format_hours(d.raw_hours)),
        format!(
            "Lunch:      {} ({})",
            format_hours(d.lunch_hours),
            cfg.lunch_policy
        ),
        format!(
            "Net:        {} ({})",
            format_hours(d.net_hours),
            hours2readable(d.net_hours)
        ),
    ];

    if let Some(notes) = entry.notes.as_deref().filter(|_| entry.has_notes()) {
        let mut wrapped = textwrap::wrap(notes, NOTES_WIDTH).into_iter();
        if let Some(first) = wrapped.next() {
            lines.push(format!("Notes:      {}", first));
        }
        lines.extend(wrapped.map(|l| format!("            {}", l)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Form block shown before submitting: fields, live total and the first
/// validation warning.
pub fn form_view(form: &EntryForm, cfg: &Config) -> String {
    let preview = form.preview(cfg.lunch_policy);
    let mut out = format!(
        "Date:       {}\nLocation:   {}\nJob number: {}\nStart:      {}\nEnd:        {}\n",
        form.date().format(&cfg.date_format),
        form.location(),
        form.job_number(),
        form.combined_start().format("%H:%M"),
        form.combined_end().format("%H:%M"),
    );
    if !form.notes().is_empty() {
        out.push_str(&format!("Notes:      {}\n", form.notes()));
    }
    out.push_str(&format!("Total:      {}\n", format_hours(preview.net_hours)));

    if let Some(warn) = form.validation_warning() {
        out.push_str(&format!("{}\n", Colour::Red.paint(warn.to_string())));
    }
    out
}

pub fn print_form(form: &EntryForm, cfg: &Config) {
    header(form.title());
    print!("{}", form_view(form, cfg));
    if form.is_valid() {
        info(format!("{} …", form.submit_label()));
    }
}
