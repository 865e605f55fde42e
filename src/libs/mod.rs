//! Core library modules for tsurf.
//!
//! - **Tracking core**: clock, day model, aggregation, tracker
//! - **Storage**: the `DayStore` contract and its JSON backend
//! - **Presentation**: formatting, tables, export, messages
//! - **Infrastructure**: configuration, data directory, logging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsurf::libs::store::JsonDayStore;
//! use tsurf::libs::tracker::Tracker;
//!
//! let tracker = Tracker::new(JsonDayStore::new(JsonDayStore::default_path()));
//! let outcome = tracker.start()?;
//! println!("{}", outcome.message);
//! # Ok::<(), tsurf::libs::tracker::TrackerError>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod view;
