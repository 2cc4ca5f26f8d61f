//! Search / date predicate applied to the entry list.

use crate::core::calculator::LunchPolicy;
use crate::models::entry::WorkEntry;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Matched case-insensitively against location and job number.
    /// Empty means "no search filter".
    pub search: String,
    /// Calendar day the entry must fall on.
    pub date: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn new(search: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            search: search.into(),
            date,
        }
    }

    pub fn matches(&self, entry: &WorkEntry) -> bool {
        let mut ok = true;

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            ok = entry.location.to_lowercase().contains(&needle)
                || entry.job_number.to_lowercase().contains(&needle);
        }

        if let Some(day) = self.date {
            ok = ok && entry.date.date_naive() == day;
        }

        ok
    }

    /// Matching entries, in the order they were given.
    pub fn apply<'a>(&self, entries: &'a [WorkEntry]) -> Vec<&'a WorkEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Sum of net hours, the list footer's "Total".
pub fn total_net_hours<'a, I>(entries: I, policy: LunchPolicy) -> f64
where
    I: IntoIterator<Item = &'a WorkEntry>,
{
    entries
        .into_iter()
        .map(|e| e.duration_hours_net(policy))
        .sum()
}
