//! Persistence of day records.
//!
//! The tracker talks to storage only through [`DayStore`]: one record per
//! calendar date, overwritten on every save. Reads never fail; a record that
//! is missing or cannot be decoded is reported as absent so the tracker
//! falls back to "no data" instead of refusing to work.
//!
//! Two backends exist: [`JsonDayStore`] keeps every day in a single JSON
//! object keyed by date string, and [`crate::db::days::Days`] keeps them in
//! SQLite. [`open`] picks one from the configuration.

use crate::db::days::Days;
use crate::libs::config::{StorageBackend, StorageConfig};
use crate::libs::data_storage::DataStorage;
use crate::libs::day::Day;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const JSON_FILE_NAME: &str = "data.json";

/// Interface for abstracting storage of day records.
pub trait DayStore {
    /// Persists `day` under its date, replacing any previous record.
    fn save(&self, day: &Day) -> Result<()>;

    /// The record for `date`, or `None` when there is none or it is unreadable.
    fn load(&self, date: NaiveDate) -> Option<Day>;
}

impl<T: DayStore + ?Sized> DayStore for &T {
    fn save(&self, day: &Day) -> Result<()> {
        (**self).save(day)
    }

    fn load(&self, date: NaiveDate) -> Option<Day> {
        (**self).load(date)
    }
}

impl<T: DayStore + ?Sized> DayStore for Box<T> {
    fn save(&self, day: &Day) -> Result<()> {
        (**self).save(day)
    }

    fn load(&self, date: NaiveDate) -> Option<Day> {
        (**self).load(date)
    }
}

/// All days in one pretty-printed JSON object: `{ "2026-01-30": { ... } }`.
#[derive(Debug, Clone)]
pub struct JsonDayStore {
    data_file: PathBuf,
}

impl JsonDayStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self { data_file: data_file.into() }
    }

    /// `data.json` in the application data directory.
    pub fn default_path() -> PathBuf {
        DataStorage::new().base_path().join(JSON_FILE_NAME)
    }

    /// Every stored record as raw JSON. Anything unreadable is treated as empty.
    fn load_all(&self) -> Map<String, Value> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(_) => return Map::new(),
        };
        if content.trim().is_empty() {
            return Map::new();
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(records)) => records,
            Ok(_) => {
                warn!(path = %self.data_file.display(), "data file is not a JSON object, ignoring it");
                Map::new()
            }
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "data file is corrupt, ignoring it");
                Map::new()
            }
        }
    }
}

impl DayStore for JsonDayStore {
    fn save(&self, day: &Day) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let mut records = self.load_all();
        records.insert(day.key(), serde_json::to_value(day)?);

        let file = File::create(&self.data_file).with_context(|| format!("writing {}", self.data_file.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;
        debug!(date = %day.key(), spans = day.spans.len(), "saved day");
        Ok(())
    }

    fn load(&self, date: NaiveDate) -> Option<Day> {
        let key = date.format(crate::libs::day::DATE_FORMAT).to_string();
        let value = self.load_all().remove(&key)?;
        match serde_json::from_value::<Day>(value) {
            Ok(day) => Some(day),
            Err(e) => {
                warn!(date = %key, error = %e, "stored day is malformed, ignoring it");
                None
            }
        }
    }
}

/// Opens the backend named by the configuration.
pub fn open(config: &StorageConfig) -> Result<Box<dyn DayStore>> {
    match config.backend {
        StorageBackend::Json => {
            let path = config.data_file.clone().unwrap_or_else(JsonDayStore::default_path);
            Ok(Box::new(JsonDayStore::new(path)))
        }
        StorageBackend::Sqlite => {
            let path = config.data_file.clone().unwrap_or_else(Days::default_path);
            match Days::open(&path) {
                Ok(days) => Ok(Box::new(days)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "database is unusable, treating it as empty");
                    Ok(Box::new(UnavailableStore { path, reason: format!("{:#}", e) }))
                }
            }
        }
    }
}

/// Stand-in for a database that could not be opened: reads find nothing and
/// writes fail with the original cause, leaving the file untouched.
struct UnavailableStore {
    path: PathBuf,
    reason: String,
}

impl DayStore for UnavailableStore {
    fn save(&self, _day: &Day) -> Result<()> {
        anyhow::bail!("database {} is unusable: {}", self.path.display(), self.reason)
    }

    fn load(&self, _date: NaiveDate) -> Option<Day> {
        None
    }
}
