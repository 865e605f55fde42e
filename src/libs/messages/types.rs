/// Every user-facing line of text the application prints.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and fill in its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === DAY MESSAGES ===
    DayStarted(String),       // HH:MM
    DayAlreadyStarted,
    DayNotStarted,
    DayStopped(String),       // HH:MM
    TotalTimeTracked(String), // H:MM:SS
    DayStoppedWithTotal {
        time: String,
        total: String,
    },
    NoActiveDay,
    ActiveSince(String), // HH:MM

    // === TASK MESSAGES ===
    SwitchedTo {
        task: String,
        time: String,
    },
    AlreadyWorkingOn(String),
    CurrentTask {
        task: String,
        since: String,
    },
    NoCurrentTask,
    NoTasksRecorded,
    TaskNameEmpty,

    // === REPORT MESSAGES ===
    ReportRetrieved,
    ReportHeader(String), // date
    ExportCompleted(String), // path

    // === STORAGE MESSAGES ===
    DatabaseUpToDate,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    PromptStorageBackend,
    PromptDataFile,
}
