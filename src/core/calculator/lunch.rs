//! Lunch deduction.

use crate::utils::date::at_time;
use chrono::{DateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

const LUNCH_START_HOUR: u32 = 12;
const LUNCH_END_HOUR: u32 = 13;

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// How the lunch break is removed from a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LunchPolicy {
    /// Subtract the part of the shift that falls inside 12:00–13:00.
    #[default]
    Window,
    /// Subtract one hour from every shift.
    Flat,
}

impl LunchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LunchPolicy::Window => "window",
            LunchPolicy::Flat => "flat",
        }
    }
}

impl fmt::Display for LunchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 12:00 and 13:00 on the calendar day of `date`.
pub fn lunch_window<Tz: TimeZone>(date: &DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
    (
        at_time(date, hour(LUNCH_START_HOUR)),
        at_time(date, hour(LUNCH_END_HOUR)),
    )
}

/// Length in hours of `[start, end] ∩ [12:00, 13:00]` on `date`'s day.
pub fn lunch_overlap_hours<Tz: TimeZone>(
    date: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> f64 {
    let (lunch_start, lunch_end) = lunch_window(date);

    let overlap_start = if *start > lunch_start {
        start.clone()
    } else {
        lunch_start
    };
    let overlap_end = if *end < lunch_end {
        end.clone()
    } else {
        lunch_end
    };

    let seconds = (overlap_end - overlap_start).num_seconds().max(0);
    seconds as f64 / 3600.0
}
