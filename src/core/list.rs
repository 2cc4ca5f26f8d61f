//! List screen state: every stored entry, the active filter and the
//! values derived from them.

use crate::core::calculator::LunchPolicy;
use crate::core::filter::{self, EntryFilter};
use crate::db::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use chrono::NaiveDate;

pub struct ListLogic {
    entries: Vec<WorkEntry>,
    filter: EntryFilter,
    policy: LunchPolicy,
}

impl ListLogic {
    pub fn new(policy: LunchPolicy) -> Self {
        Self {
            entries: Vec::new(),
            filter: EntryFilter::default(),
            policy,
        }
    }

    /// Build the controller and load the current contents of `repo`.
    pub fn load<R: EntryRepository + ?Sized>(repo: &R, policy: LunchPolicy) -> AppResult<Self> {
        let mut list = Self::new(policy);
        list.refresh(repo)?;
        Ok(list)
    }

    /// Reload every entry, most recent day first.
    pub fn refresh<R: EntryRepository + ?Sized>(&mut self, repo: &R) -> AppResult<()> {
        self.entries = repo.list_all_sorted_by_date_desc()?;
        Ok(())
    }

    pub fn policy(&self) -> LunchPolicy {
        self.policy
    }

    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: EntryFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.filter.date = date;
    }

    pub fn clear_filters(&mut self) {
        self.filter = EntryFilter::default();
    }

    /// Every loaded entry, ignoring the filter.
    pub fn all(&self) -> &[WorkEntry] {
        &self.entries
    }

    /// Entries passing the filter, in list order.
    pub fn visible(&self) -> Vec<&WorkEntry> {
        self.filter.apply(&self.entries)
    }

    pub fn is_empty_view(&self) -> bool {
        !self.entries.iter().any(|e| self.filter.matches(e))
    }

    pub fn total_net_hours(&self) -> f64 {
        filter::total_net_hours(self.visible(), self.policy)
    }

    /// Delete the entry shown at `index` (0-based) of the filtered list.
    pub fn delete_visible<R: EntryRepository + ?Sized>(
        &mut self,
        repo: &mut R,
        index: usize,
    ) -> AppResult<WorkEntry> {
        let target = self
            .visible()
            .get(index)
            .map(|e| (*e).clone())
            .ok_or(AppError::InvalidIndex(index + 1))?;

        repo.delete_one(target.id)?;
        self.refresh(&*repo)?;
        Ok(target)
    }

    pub fn delete_by_id<R: EntryRepository + ?Sized>(
        &mut self,
        repo: &mut R,
        id: i64,
    ) -> AppResult<()> {
        repo.delete_one(id)?;
        self.refresh(&*repo)
    }
}
