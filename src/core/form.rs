//! Entry form state: transient field values, validation and the
//! create/update transition performed on submit.

use crate::core::calculator::{self, Durations, LunchPolicy};
use crate::db::EntryRepository;
use crate::errors::{AppResult, ValidationError};
use crate::models::entry::WorkEntry;
use crate::utils::date::{combine, local_at, local_day, start_of_day};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    /// Bound to the stored entry with this id.
    Editing(i64),
}

/// Time pickers' initial values for a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(WorkEntry),
    Updated(WorkEntry),
}

impl SubmitOutcome {
    pub fn entry(&self) -> &WorkEntry {
        match self {
            SubmitOutcome::Created(e) | SubmitOutcome::Updated(e) => e,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    mode: FormMode,
    date: DateTime<Local>,
    location: String,
    job_number: String,
    notes: String,
    // Only the time of day matters; the day comes from `date` on submit.
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
}

impl EntryForm {
    pub fn new(today: NaiveDate, defaults: FormDefaults) -> Self {
        Self {
            mode: FormMode::New,
            date: local_day(today),
            location: String::new(),
            job_number: String::new(),
            notes: String::new(),
            start_time: local_at(today, defaults.start),
            end_time: local_at(today, defaults.end),
        }
    }

    /// Load the current values of `entry`. Later changes to the stored
    /// entry are not picked up.
    pub fn edit(entry: &WorkEntry) -> Self {
        Self {
            mode: FormMode::Editing(entry.id),
            date: entry.date,
            location: entry.location.clone(),
            job_number: entry.job_number.clone(),
            notes: entry.notes.clone().unwrap_or_default(),
            start_time: entry.start_time,
            end_time: entry.end_time,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit entry"
        } else {
            "New entry"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Save" } else { "Add" }
    }

    // ------------------------------------------------
    // Field edits
    // ------------------------------------------------

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = local_day(date);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_job_number(&mut self, job_number: impl Into<String>) {
        self.job_number = job_number.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_start_time(&mut self, time: NaiveTime) {
        self.start_time = local_at(self.date.date_naive(), time);
    }

    pub fn set_end_time(&mut self, time: NaiveTime) {
        self.end_time = local_at(self.date.date_naive(), time);
    }

    pub fn date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn job_number(&self) -> &str {
        &self.job_number
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Start time placed on the form's date.
    pub fn combined_start(&self) -> DateTime<Local> {
        combine(&self.date, &self.start_time)
    }

    pub fn combined_end(&self) -> DateTime<Local> {
        combine(&self.date, &self.end_time)
    }

    // ------------------------------------------------
    // Validation
    // ------------------------------------------------

    /// First failing rule: location, then job number, then end before start.
    pub fn validation_warning(&self) -> Option<ValidationError> {
        if self.location.trim().is_empty() {
            return Some(ValidationError::EmptyLocation);
        }
        if self.job_number.trim().is_empty() {
            return Some(ValidationError::EmptyJobNumber);
        }
        if self.combined_end() < self.combined_start() {
            return Some(ValidationError::EndBeforeStart);
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.validation_warning().is_none()
    }

    /// Hours the entry would have if submitted now.
    pub fn preview(&self, policy: LunchPolicy) -> Durations {
        calculator::compute(
            &start_of_day(&self.date),
            &self.combined_start(),
            &self.combined_end(),
            policy,
        )
    }

    /// The record this form would store, carrying the bound id when editing.
    pub fn to_entry(&self) -> WorkEntry {
        let notes = if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.clone())
        };

        let mut entry = WorkEntry::new(
            self.date,
            self.location.clone(),
            self.job_number.clone(),
            self.combined_start(),
            self.combined_end(),
            notes,
        );
        if let FormMode::Editing(id) = self.mode {
            entry.id = id;
        }
        entry
    }

    // ------------------------------------------------
    // Submit
    // ------------------------------------------------

    /// Insert (new) or overwrite (editing) the entry in `repo`.
    ///
    /// Nothing is written while the form is invalid. Storage failures are
    /// returned to the caller.
    pub fn submit<R: EntryRepository + ?Sized>(&self, repo: &mut R) -> AppResult<SubmitOutcome> {
        if let Some(err) = self.validation_warning() {
            return Err(err.into());
        }

        let mut entry = self.to_entry();

        match self.mode {
            FormMode::New => {
                entry.id = repo.insert_one(&entry)?;
                Ok(SubmitOutcome::Created(entry))
            }
            FormMode::Editing(_) => {
                repo.update_one(&entry)?;
                Ok(SubmitOutcome::Updated(entry))
            }
        }
    }
}
