use crate::core::calculator::{self, Durations, LunchPolicy};
use crate::utils::date::start_of_day;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkEntry {
    pub id: i64,                     // ⇔ work_entries.id (0 = not stored yet)
    pub date: DateTime<Local>,       // ⇔ work_entries.date (UNIX secs, local midnight)
    pub location: String,            // ⇔ work_entries.location
    pub job_number: String,          // ⇔ work_entries.job_number
    pub start_time: DateTime<Local>, // ⇔ work_entries.start_time (UNIX secs)
    pub end_time: DateTime<Local>,   // ⇔ work_entries.end_time (UNIX secs)
    pub notes: Option<String>,       // ⇔ work_entries.notes (NULL when absent)
}

impl WorkEntry {
    /// Build an unsaved entry. `date` is truncated to the start of its day;
    /// start and end are kept as given.
    pub fn new(
        date: DateTime<Local>,
        location: impl Into<String>,
        job_number: impl Into<String>,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            date: start_of_day(&date),
            location: location.into(),
            job_number: job_number.into(),
            start_time,
            end_time,
            notes,
        }
    }

    pub fn duration_hours_raw(&self) -> f64 {
        calculator::raw_hours(&self.start_time, &self.end_time)
    }

    /// Net hours under `policy`. The binary passes the configured policy,
    /// `LunchPolicy::Window` unless the user opted into `flat`.
    pub fn duration_hours_net(&self, policy: LunchPolicy) -> f64 {
        self.durations(policy).net_hours
    }

    pub fn durations(&self, policy: LunchPolicy) -> Durations {
        calculator::compute(&self.date, &self.start_time, &self.end_time, policy)
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn date_str(&self, fmt: &str) -> String {
        self.date.format(fmt).to_string()
    }

    pub fn time_range_str(&self) -> String {
        format!(
            "{} – {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
