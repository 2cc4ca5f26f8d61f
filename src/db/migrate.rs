use crate::ui::messages::{success, warning};
use log::debug;
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if the `work_entries` table exists.
fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='work_entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `work_entries` table has a `notes` column.
fn entries_has_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('work_entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `work_entries` table with the current schema.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         INTEGER NOT NULL,
            location     TEXT NOT NULL,
            job_number   TEXT NOT NULL,
            start_time   INTEGER NOT NULL,
            end_time     INTEGER NOT NULL,
            notes        TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_entries_date ON work_entries(date);
        "#,
    )?;
    Ok(())
}

/// Databases created before notes existed lack the column; it is nullable,
/// so existing rows simply read back without notes.
fn migrate_add_notes_column(conn: &Connection) -> Result<()> {
    if entries_has_notes_column(conn)? {
        return Ok(());
    }

    warning("Adding 'notes' column to work_entries table...");

    conn.execute("ALTER TABLE work_entries ADD COLUMN notes TEXT;", [])?;

    success("'notes' column added.");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()` and on every repository open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;
        debug!("created work_entries table");
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_work_entries_date ON work_entries(date);")?;
    migrate_add_notes_column(conn)?;

    Ok(())
}
