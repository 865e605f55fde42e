use super::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "tsurf.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Location of `tsurf.db` in the application data directory.
    pub fn default_path() -> PathBuf {
        DataStorage::new().base_path().join(DB_FILE_NAME)
    }

    /// Opens (or creates) a database at `path` and brings its schema up to date.
    pub fn open(path: &Path) -> Result<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut conn = Connection::open(path)?;
        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
