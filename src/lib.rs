//! # Tsurf - daily task time tracking
//!
//! A command-line utility for tracking a working day task by task.
//!
//! ## Features
//!
//! - **Day Tracking**: Start and stop the working day
//! - **Task Switching**: One running task at a time, switching closes the previous one
//! - **Reports**: Per-task totals, live while the day is running
//! - **Storage Backends**: JSON file or SQLite database
//! - **Data Export**: Report export to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsurf::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
