//! Gross and net hours of a single shift.

use super::lunch::{LunchPolicy, lunch_overlap_hours};
use chrono::{DateTime, TimeZone};

/// Hours derived from a shift; never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Durations {
    pub raw_hours: f64,
    pub lunch_hours: f64,
    pub net_hours: f64,
}

/// `end - start` in hours; an inverted interval counts as zero.
pub fn raw_hours<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> f64 {
    let seconds = (end.clone() - start.clone()).num_seconds();
    (seconds as f64 / 3600.0).max(0.0)
}

pub fn compute<Tz: TimeZone>(
    date: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    policy: LunchPolicy,
) -> Durations {
    let raw = raw_hours(start, end);
    let lunch = match policy {
        LunchPolicy::Window => lunch_overlap_hours(date, start, end),
        LunchPolicy::Flat => 1.0,
    };

    Durations {
        raw_hours: raw,
        lunch_hours: lunch.min(raw),
        net_hours: (raw - lunch).max(0.0),
    }
}

pub fn net_hours<Tz: TimeZone>(
    date: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    policy: LunchPolicy,
) -> f64 {
    compute(date, start, end, policy).net_hours
}
