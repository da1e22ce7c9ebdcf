//! The record store client.
//!
//! [`RecordStore`] is the single entry point for CRUD operations on user
//! records. It owns the connection pool; every operation checks out one
//! connection scoped to that call, runs one statement, and returns the
//! connection to the pool on every exit path. Calls are synchronous and
//! block until the database round-trip completes.

use roster_common::{Result, UserId};
use roster_db::models::User;
use roster_db::pool::{get_conn, init_memory_pool, init_pool, DbPool};
use roster_db::queries::users;

/// Synchronous CRUD client over the users table.
pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    /// Open (or create) a database file and run pending migrations.
    pub fn open(db_path: &str, pool_size: u32) -> Result<Self> {
        let pool = init_pool(db_path, pool_size)?;
        Ok(Self { pool })
    }

    /// Open an in-memory database, lost when the store is dropped.
    pub fn in_memory() -> Result<Self> {
        let pool = init_memory_pool()?;
        Ok(Self { pool })
    }

    /// Insert a new record and return it with its database-assigned id.
    pub fn create(&self, name: &str, email: &str) -> Result<User> {
        let conn = get_conn(&self.pool)?;
        tracing::debug!("create name={:?} email={:?}", name, email);
        users::create_user(&conn, name, email)
    }

    /// Fetch all records as a fresh snapshot, in database-defined order.
    pub fn read_all(&self) -> Result<Vec<User>> {
        let conn = get_conn(&self.pool)?;
        users::list_users(&conn)
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: UserId) -> Result<Option<User>> {
        let conn = get_conn(&self.pool)?;
        users::get_user(&conn, id)
    }

    /// Overwrite name and email for the matching record.
    ///
    /// Returns the affected-row count; 0 means the id did not match and
    /// nothing changed.
    pub fn update(&self, id: UserId, name: &str, email: &str) -> Result<usize> {
        let conn = get_conn(&self.pool)?;
        tracing::debug!("update id={} name={:?} email={:?}", id, name, email);
        users::update_user(&conn, id, name, email)
    }

    /// Remove the matching record.
    ///
    /// Returns whether a row was removed; a missing id is a no-op.
    pub fn delete(&self, id: UserId) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        tracing::debug!("delete id={}", id);
        users::delete_user(&conn, id)
    }
}
