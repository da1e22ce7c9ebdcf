//! Database connection pool management.
//!
//! This module provides connection pooling for SQLite using r2d2.
//! It handles pool initialization, connection customization, and running
//! migrations. Callers check a connection out per operation and the pool
//! reclaims it on drop, so every operation releases its connection on all
//! exit paths.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use roster_common::{Error, Result};

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a new database pool with the given file path.
///
/// This function will:
/// - Create the SQLite database file if it doesn't exist
/// - Set up connection pooling with r2d2
/// - Enable foreign key constraints on all connections
/// - Run pending database migrations
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file
/// * `pool_size` - Maximum number of pooled connections
///
/// # Returns
///
/// * `Ok(DbPool)` - Initialized connection pool
/// * `Err(Error)` - If pool creation or migration fails
///
/// # Example
///
/// ```no_run
/// use roster_db::pool::init_pool;
///
/// let pool = init_pool("/var/lib/roster/roster.db", 4).unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_pool(db_path: &str, pool_size: u32) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        // Enable foreign key constraints on each new connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    });

    let pool = Pool::builder()
        .max_size(pool_size)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create connection pool: {}", e)))?;

    // Run migrations on a connection from the pool
    let conn = pool
        .get()
        .map_err(|e| Error::database(format!("Failed to get connection for migrations: {}", e)))?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::database(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}

/// Initialize an in-memory database pool for testing.
///
/// This creates a connection pool backed by an in-memory SQLite database.
/// The database will be lost when the pool is dropped.
///
/// # Returns
///
/// * `Ok(DbPool)` - Initialized in-memory connection pool
/// * `Err(Error)` - If pool creation or migration fails
///
/// # Example
///
/// ```
/// use roster_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| {
        // Enable foreign key constraints on each new connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    });

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create in-memory pool: {}", e)))?;

    // Run migrations on a connection from the pool
    let conn = pool
        .get()
        .map_err(|e| Error::database(format!("Failed to get connection for migrations: {}", e)))?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::database(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool.
///
/// This is a convenience wrapper around `pool.get()` that converts the
/// r2d2 error into our common Error type.
///
/// # Arguments
///
/// * `pool` - The connection pool to get a connection from
///
/// # Returns
///
/// * `Ok(PooledConnection)` - A pooled database connection
/// * `Err(Error)` - If unable to get a connection from the pool
///
/// # Example
///
/// ```
/// use roster_db::pool::{init_memory_pool, get_conn};
///
/// let pool = init_memory_pool().unwrap();
/// let conn = get_conn(&pool).unwrap();
/// ```
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {}", e)))
}
