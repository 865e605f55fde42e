//! Duration and clock-time formatting for display.
//!
//! Durations render as `H:MM:SS` with unpadded hours, clock times as
//! `HH:MM`. Negative durations are shown as zero.
//!
//! ```rust
//! use tsurf::libs::formatter::{format_duration, format_seconds};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(34) + Duration::seconds(12))), "2:34:12");
//! assert_eq!(format_seconds(45), "0:00:45");
//! ```

use chrono::{Duration, NaiveDateTime};

/// Formats a duration as `H:MM:SS`.
pub fn format_duration(duration: &Duration) -> String {
    format_seconds(duration.num_seconds())
}

pub fn format_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, mins, secs)
}

/// Formats the time of day as `HH:MM`.
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Share of `part` in `whole` as a percentage, or 0 when `whole` is not positive.
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}
