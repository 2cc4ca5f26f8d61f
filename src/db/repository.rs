//! Storage contract used by the list and form controllers.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use log::debug;

/// The four operations the controllers need, plus a lookup by id.
///
/// Implementations perform each call as a single-record write; nothing is
/// validated here, an inverted interval is stored as given.
pub trait EntryRepository {
    /// Store a new entry and return its id. `entry.id` is ignored.
    fn insert_one(&mut self, entry: &WorkEntry) -> AppResult<i64>;

    /// Overwrite the stored entry with the same id.
    fn update_one(&mut self, entry: &WorkEntry) -> AppResult<()>;

    fn delete_one(&mut self, id: i64) -> AppResult<()>;

    fn find_one(&self, id: i64) -> AppResult<Option<WorkEntry>>;

    fn list_all_sorted_by_date_desc(&self) -> AppResult<Vec<WorkEntry>>;
}

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open the database at `path`, creating or upgrading the schema.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl EntryRepository for SqliteRepository {
    fn insert_one(&mut self, entry: &WorkEntry) -> AppResult<i64> {
        let id = queries::insert_entry(&self.pool.conn, entry)?;
        debug!("inserted work entry {id}");
        Ok(id)
    }

    fn update_one(&mut self, entry: &WorkEntry) -> AppResult<()> {
        let n = queries::update_entry(&self.pool.conn, entry)?;
        if n == 0 {
            return Err(AppError::EntryNotFound(entry.id));
        }
        debug!("updated work entry {}", entry.id);
        Ok(())
    }

    fn delete_one(&mut self, id: i64) -> AppResult<()> {
        let n = queries::delete_entry(&self.pool.conn, id)?;
        if n == 0 {
            return Err(AppError::EntryNotFound(id));
        }
        debug!("deleted work entry {id}");
        Ok(())
    }

    fn find_one(&self, id: i64) -> AppResult<Option<WorkEntry>> {
        queries::load_entry(&self.pool.conn, id)
    }

    fn list_all_sorted_by_date_desc(&self) -> AppResult<Vec<WorkEntry>> {
        queries::load_entries_desc(&self.pool.conn)
    }
}
