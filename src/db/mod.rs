//! SQLite storage backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsurf::db::days::Days;
//! use tsurf::libs::store::DayStore;
//! use chrono::Local;
//!
//! let days = Days::open(&Days::default_path())?;
//! let today = days.load(Local::now().date_naive());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management; every connection is migrated on open.
pub mod db;

/// Day records and their spans.
pub mod days;

/// Versioned schema changes, tracked in the `migrations` table.
pub mod migrations;
