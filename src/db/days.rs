use super::db::Db;
use crate::libs::day::{Day, Span};
use crate::libs::store::DayStore;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const UPSERT_DAY: &str = "INSERT INTO days (date, start_time, end_time, current_task) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(date) DO UPDATE SET start_time = excluded.start_time, end_time = excluded.end_time, current_task = excluded.current_task";
const DELETE_SPANS: &str = "DELETE FROM spans WHERE date = ?1";
const INSERT_SPAN: &str = "INSERT INTO spans (date, position, task, start_time, end_time) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_DAY: &str = "SELECT date, start_time, end_time, current_task FROM days WHERE date = ?1";
const SELECT_SPANS: &str = "SELECT task, start_time, end_time FROM spans WHERE date = ?1 ORDER BY position";

/// SQLite-backed [`DayStore`].
pub struct Days {
    conn: Connection,
}

impl Days {
    /// `tsurf.db` in the application data directory.
    pub fn default_path() -> PathBuf {
        Db::default_path()
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Days { conn: db.conn })
    }

    pub fn insert(&self, day: &Day) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(UPSERT_DAY, params![day.date, day.start_time, day.end_time, day.current_task])?;
        tx.execute(DELETE_SPANS, params![day.date])?;
        {
            let mut stmt = tx.prepare(INSERT_SPAN)?;
            for (position, span) in day.spans.iter().enumerate() {
                stmt.execute(params![day.date, position as i64, span.task, span.start, span.end])?;
            }
        }
        tx.commit()?;
        debug!(date = %day.key(), spans = day.spans.len(), "saved day");
        Ok(())
    }

    pub fn fetch(&self, date: NaiveDate) -> Result<Option<Day>> {
        let day = self
            .conn
            .query_row(SELECT_DAY, params![date], |row| {
                Ok(Day {
                    date: row.get(0)?,
                    start_time: row.get::<_, Option<NaiveDateTime>>(1)?,
                    end_time: row.get::<_, Option<NaiveDateTime>>(2)?,
                    current_task: row.get(3)?,
                    spans: Vec::new(),
                })
            })
            .optional()?;

        let Some(mut day) = day else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(SELECT_SPANS)?;
        let span_iter = stmt.query_map(params![date], |row| {
            Ok(Span {
                task: row.get(0)?,
                start: row.get(1)?,
                end: row.get(2)?,
            })
        })?;
        for span in span_iter {
            day.spans.push(span?);
        }

        Ok(Some(day))
    }
}

impl DayStore for Days {
    fn save(&self, day: &Day) -> Result<()> {
        self.insert(day)
    }

    fn load(&self, date: NaiveDate) -> Option<Day> {
        match self.fetch(date) {
            Ok(day) => day,
            Err(e) => {
                warn!(%date, error = %e, "failed to read day from database, ignoring it");
                None
            }
        }
    }
}
