//! Versioned schema for the SQLite store.
//!
//! Each migration runs once, inside the same transaction as every other
//! pending migration, and is recorded in the `migrations` table so the next
//! open skips it.
//!
//! ```rust,no_run
//! use tsurf::db::migrations::MigrationManager;
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("tsurf.db")?;
//! MigrationManager::new().run_migrations(&mut conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::{debug, error};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of schema migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: one row per date plus its spans in insertion order
        self.add_migration(1, "create_days_and_spans", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS days (
                    date DATE NOT NULL PRIMARY KEY,
                    start_time TIMESTAMP,
                    end_time TIMESTAMP,
                    current_task TEXT
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS spans (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    position INTEGER NOT NULL,
                    task TEXT NOT NULL,
                    start_time TIMESTAMP NOT NULL,
                    end_time TIMESTAMP,
                    FOREIGN KEY (date) REFERENCES days(date) ON DELETE CASCADE
                )",
                [],
            )?;
            tx.execute("CREATE UNIQUE INDEX IF NOT EXISTS idx_spans_date_position ON spans(date, position)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        let tx = conn.transaction()?;
        for migration in pending {
            debug!(version = migration.version, name = migration.name, "running migration");
            if let Err(e) = (migration.up)(&tx) {
                error!(version = migration.version, error = %e, "migration failed");
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Highest applied migration, or 0 for a fresh database.
    pub fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        // MAX over an empty table yields a single NULL row
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let manager = MigrationManager::new();
        let mut conn = Connection::open_in_memory().unwrap();

        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(manager.get_current_version(&conn).unwrap(), manager.latest_version());

        manager.run_migrations(&mut conn).unwrap();
        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, manager.latest_version() as i64);
    }

    #[test]
    fn version_query_errors_are_reported() {
        let manager = MigrationManager::new();
        let conn = Connection::open_in_memory().unwrap();

        // no migrations table yet
        assert!(manager.get_current_version(&conn).is_err());

        conn.execute(MIGRATIONS_TABLE, []).unwrap();
        assert_eq!(manager.get_current_version(&conn).unwrap(), 0);
    }
}
