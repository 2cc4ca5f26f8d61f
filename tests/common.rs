#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{
    DateTime, FixedOffset, Local, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone,
};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rshiftlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add the two reference shifts:
/// - #1 2025-09-01 HDES-GTC / 321487 08:00–17:00 (8h net)
/// - #2 2025-09-15 Site B / 99001 14:00–18:00 (4h net)
pub fn init_db_with_data(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-01",
            "--location",
            "HDES-GTC",
            "--job",
            "321487",
            "--start",
            "08:00",
            "--end",
            "17:00",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-15",
            "--location",
            "Site B",
            "--job",
            "99001",
            "--start",
            "14:00",
            "--end",
            "18:00",
        ])
        .assert()
        .success();
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// Local instant at `h:m` on the given day.
pub fn local(date: NaiveDate, h: u32, m: u32) -> DateTime<Local> {
    rshiftlog::utils::date::local_at(date, hm(h, m))
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// POSIX rule with the 2017 Brazilian spring-forward: on 2017-10-15 local
/// midnight jumps to 01:00 (-03:00 to -02:00).
pub const GAP_TZ: &str = "BRT3BRST,M10.3.0/0,M2.3.0/0";

/// Zone with a single one-hour gap, [2017-10-15 00:00, 01:00) local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapZone;

impl GapZone {
    pub fn gap_day() -> NaiveDate {
        day(2017, 10, 15)
    }

    fn before() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).expect("valid offset")
    }

    fn after() -> FixedOffset {
        FixedOffset::west_opt(2 * 3600).expect("valid offset")
    }

    fn gap_start() -> NaiveDateTime {
        Self::gap_day().and_time(NaiveTime::MIN)
    }

    /// Instant at `h:m` on 2017-10-`d` in this zone.
    pub fn at(d: u32, h: u32, m: u32) -> DateTime<GapZone> {
        GapZone
            .from_local_datetime(&day(2017, 10, d).and_time(hm(h, m)))
            .single()
            .expect("time outside the gap")
    }
}

impl TimeZone for GapZone {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
        GapZone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
        let start = Self::gap_start();
        if *local < start {
            MappedLocalTime::Single(Self::before())
        } else if *local < start + TimeDelta::hours(1) {
            MappedLocalTime::None
        } else {
            MappedLocalTime::Single(Self::after())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < Self::gap_start() + TimeDelta::hours(3) {
            Self::before()
        } else {
            Self::after()
        }
    }
}
