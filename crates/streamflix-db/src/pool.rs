//! Database connection pool management.
//!
//! Connection pooling for SQLite using r2d2. Pools run pending migrations
//! before they are handed out.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use streamflix_common::{Error, Result};

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const POOL_SIZE: u32 = 4;

/// Initialize a new database pool with the given file path.
///
/// This function will:
/// - Create the SQLite database file if it doesn't exist
/// - Enable foreign key constraints on all connections
/// - Run pending database migrations
///
/// # Example
///
/// ```no_run
/// use streamflix_db::pool::init_pool;
///
/// let pool = init_pool("/var/lib/streamflix/catalog.db").unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    });

    build_pool(manager, POOL_SIZE)
}

/// Initialize an in-memory database pool for testing.
///
/// Every SQLite in-memory connection is its own database, so this pool holds
/// exactly one connection. Callers that need several concurrent connections
/// should use [`init_pool`] with a temporary file instead.
///
/// # Example
///
/// ```
/// use streamflix_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

    build_pool(manager, 1)
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create connection pool: {}", e)))?;

    let conn = pool
        .get()
        .map_err(|e| Error::database(format!("Failed to get connection for migrations: {}", e)))?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::database(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool.
///
/// Converts the r2d2 error into the common Error type.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {}", e)))
}
