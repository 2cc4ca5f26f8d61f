//! Calendar-day helpers.
//!
//! Every entry instant is interpreted on the calendar of its own time zone
//! (`Local` in the binary). When a wall-clock date-time cannot be
//! represented in that zone (DST gap) the helpers return the instant they
//! were given instead of failing.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Midnight of the calendar day `dt` falls on.
pub fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Tz> {
    at_time(dt, NaiveTime::MIN)
}

/// The instant at wall-clock `time` on the calendar day of `day`.
/// Falls back to `day` itself when that wall-clock time does not exist.
pub fn at_time<Tz: TimeZone>(day: &DateTime<Tz>, time: NaiveTime) -> DateTime<Tz> {
    day.date_naive()
        .and_time(time)
        .and_local_timezone(day.timezone())
        .earliest()
        .unwrap_or_else(|| day.clone())
}

/// Day of `day`, hour/minute/second of `time`. Sub-second precision is dropped.
pub fn combine<Tz: TimeZone>(day: &DateTime<Tz>, time: &DateTime<Tz>) -> DateTime<Tz> {
    let t = time.time();
    let t = t.with_nanosecond(0).unwrap_or(t);
    at_time(day, t)
}

pub fn same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}

/// First instant of `date` in `tz`: midnight, or the end of the DST gap
/// when midnight is skipped.
pub fn day_start_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive).earliest().unwrap_or_else(|| {
        // midnight under the offset in force before the gap
        let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1))).fix();
        let shift = TimeDelta::seconds(i64::from(before.local_minus_utc()));
        tz.from_utc_datetime(&(naive - shift))
    })
}

/// Local midnight of `date`.
pub fn local_day(date: NaiveDate) -> DateTime<Local> {
    day_start_in(&Local, date)
}

/// The instant at `time` on local `date`, as a time picker would produce it.
pub fn local_at(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    at_time(&local_day(date), time)
}

/// Convert UNIX seconds back to a local instant.
pub fn from_unix(secs: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(secs, 0).single()
}
