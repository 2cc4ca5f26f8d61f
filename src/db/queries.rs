use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::utils::date::from_unix;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRIES: &str = "SELECT id, date, location, job_number, start_time, end_time, notes
     FROM work_entries";

fn instant_column(row: &Row, idx: usize, name: &str) -> Result<chrono::DateTime<Local>> {
    let secs: i64 = row.get(name)?;
    from_unix(secs).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidDate(format!("{name}={secs}"))),
        )
    })
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    Ok(WorkEntry {
        id: row.get("id")?,
        date: instant_column(row, 1, "date")?,
        location: row.get("location")?,
        job_number: row.get("job_number")?,
        start_time: instant_column(row, 4, "start_time")?,
        end_time: instant_column(row, 5, "end_time")?,
        notes: row.get("notes")?,
    })
}

/// Insert `entry` and return the id assigned by SQLite.
pub fn insert_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_entries (date, location, job_number, start_time, end_time, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.date.timestamp(),
            entry.location,
            entry.job_number,
            entry.start_time.timestamp(),
            entry.end_time.timestamp(),
            entry.notes,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id). Returns the number of rows touched.
pub fn update_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE work_entries
         SET date = ?1, location = ?2, job_number = ?3,
             start_time = ?4, end_time = ?5, notes = ?6
         WHERE id = ?7",
        params![
            entry.date.timestamp(),
            entry.location,
            entry.job_number,
            entry.start_time.timestamp(),
            entry.end_time.timestamp(),
            entry.notes,
            entry.id,
        ],
    )?;
    Ok(n)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM work_entries WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<WorkEntry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    let entry = stmt.query_row([id], map_row).optional()?;
    Ok(entry)
}

/// All entries, most recent day first. Entries of the same day are ordered
/// by start time, latest first, then by id.
pub fn load_entries_desc(conn: &Connection) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRIES} ORDER BY date DESC, start_time DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
