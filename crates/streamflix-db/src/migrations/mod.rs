//! Database migrations module
//!
//! Schema migrations are embedded in the binary and executed in order. A
//! `schema_migrations` table records which versions have been applied.

use rusqlite::{Connection, Result};
use thiserror::Error;

/// Migration error types
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration {0} failed: {1}")]
    Failed(usize, String),
}

/// A single migration with its SQL content
struct Migration {
    version: usize,
    name: &'static str,
    sql: &'static str,
}

/// All available migrations
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial",
    sql: include_str!("001_initial.sql"),
}];

fn init_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;
    Ok(())
}

fn get_current_version(conn: &Connection) -> Result<usize> {
    conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
        row.get::<_, Option<usize>>(0)
    })
    .map(|v| v.unwrap_or(0))
}

fn apply_migration(conn: &Connection, migration: &Migration) -> Result<(), MigrationError> {
    conn.execute_batch(migration.sql)
        .map_err(|e| MigrationError::Failed(migration.version, e.to_string()))?;

    conn.execute(
        "INSERT INTO schema_migrations (version, name) VALUES (?, ?)",
        rusqlite::params![migration.version, migration.name],
    )
    .map_err(|e| MigrationError::Failed(migration.version, e.to_string()))?;

    Ok(())
}

/// Run all pending migrations
///
/// Each pending migration is applied inside its own transaction, in version
/// order.
///
/// # Returns
///
/// * `Ok(usize)` - Number of migrations applied
/// * `Err(MigrationError)` - If any migration fails
pub fn run_migrations(conn: &Connection) -> Result<usize, MigrationError> {
    init_migrations_table(conn)?;

    let current_version = get_current_version(conn)?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|m| m.version > current_version)
        .collect();

    let mut applied_count = 0;
    for migration in pending {
        let tx = conn.unchecked_transaction()?;

        apply_migration(&tx, migration)?;

        tx.commit()
            .map_err(|e| MigrationError::Failed(migration.version, e.to_string()))?;

        applied_count += 1;

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "Applied migration"
        );
    }

    Ok(applied_count)
}

/// Get the current schema version without applying migrations
pub fn current_version(conn: &Connection) -> Result<usize, MigrationError> {
    init_migrations_table(conn)?;
    Ok(get_current_version(conn)?)
}

/// Get the latest available migration version
pub fn latest_version() -> usize {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_run_migrations() {
        let conn = Connection::open_in_memory().unwrap();

        let applied = run_migrations(&conn).unwrap();
        assert_eq!(applied, MIGRATIONS.len());

        let version = current_version(&conn).unwrap();
        assert_eq!(version, latest_version());

        // Second run is a no-op
        let applied = run_migrations(&conn).unwrap();
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_schema_created() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        for table in ["movies", "schema_migrations"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table {} should exist", table);
        }
    }

    #[test]
    fn test_title_must_not_be_empty() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO movies (id, title, created_at) VALUES (1, '', '2024-01-01T00:00:00.000000Z')",
            [],
        );
        assert!(result.is_err());
    }
}
