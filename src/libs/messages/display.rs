//! Display implementation for tsurf messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent between the tracker's result messages and the CLI output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DAY MESSAGES ===
            Message::DayStarted(time) => format!("Started tracking at {}", time),
            Message::DayAlreadyStarted => "Day already started".to_string(),
            Message::DayNotStarted => "Day not started".to_string(),
            Message::DayStopped(time) => format!("Stopped tracking at {}", time),
            Message::TotalTimeTracked(total) => format!("Total time tracked: {}", total),
            Message::DayStoppedWithTotal { time, total } => {
                format!("{}. {}", Message::DayStopped(time.clone()), Message::TotalTimeTracked(total.clone()))
            }
            Message::NoActiveDay => "No active day. Use 'start' or 'switch-to' to begin tracking.".to_string(),
            Message::ActiveSince(time) => format!("Tracking since {}", time),

            // === TASK MESSAGES ===
            Message::SwitchedTo { task, time } => format!("Switched to '{}' at {}", task, time),
            Message::AlreadyWorkingOn(task) => format!("Already working on '{}'", task),
            Message::CurrentTask { task, since } => format!("Working on '{}' since {}", task, since),
            Message::NoCurrentTask => "No task selected yet".to_string(),
            Message::NoTasksRecorded => "No tasks recorded. Use 'switch-to' to track tasks.".to_string(),
            Message::TaskNameEmpty => "Task name cannot be empty".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportRetrieved => "Report data retrieved".to_string(),
            Message::ReportHeader(date) => format!("Report for {}", date),
            Message::ExportCompleted(path) => format!("Report exported to {}", path),

            // === STORAGE MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptStorageBackend => "Where should tracking data be stored".to_string(),
            Message::PromptDataFile => "Data file path (leave empty for the default location)".to_string(),
        };
        write!(f, "{}", text)
    }
}
