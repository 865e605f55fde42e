//! Day and task state transitions.
//!
//! Every operation is a single load → validate → mutate → save sequence
//! against today's record, where "today" is the date of the clock's current
//! reading. Nothing is cached between calls; the store is the only owner of
//! durable state.
//!
//! ```rust,no_run
//! use tsurf::libs::store::JsonDayStore;
//! use tsurf::libs::tracker::Tracker;
//!
//! let tracker = Tracker::new(JsonDayStore::new("data.json"));
//! tracker.switch_to("coding")?;
//! let report = tracker.get_report_data()?;
//! println!("{:?}", report.task_totals);
//! # Ok::<(), tsurf::libs::tracker::TrackerError>(())
//! ```

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::day::Day;
use crate::libs::formatter::{format_duration, format_time};
use crate::libs::messages::Message;
use crate::libs::store::DayStore;
use crate::libs::summary::{TaskTotals, TaskTotalsCalculator};
use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::debug;

/// Why a tracker operation was refused.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// `start` while today's day is already running.
    #[error("{}", Message::DayAlreadyStarted)]
    AlreadyStarted,
    /// `stop` or a report with no qualifying day for today.
    #[error("{}", Message::DayNotStarted)]
    NotStarted,
    /// The store could not persist the updated day.
    #[error("Failed to save tracking data: {0:#}")]
    Storage(anyhow::Error),
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerOutcome {
    pub message: String,
    pub day: Day,
    pub task_totals: Option<TaskTotals>,
}

impl TrackerOutcome {
    fn new(message: Message, day: Day) -> Self {
        TrackerOutcome {
            message: message.to_string(),
            day,
            task_totals: None,
        }
    }

    fn with_totals(mut self, totals: TaskTotals) -> Self {
        self.task_totals = Some(totals);
        self
    }
}

pub type TrackerResult = Result<TrackerOutcome, TrackerError>;

/// Flag-and-message view of a [`TrackerResult`] for front ends that only
/// print a line and pick an exit code.
pub trait TrackerResultExt {
    fn success(&self) -> bool;
    fn message(&self) -> String;
}

impl TrackerResultExt for TrackerResult {
    fn success(&self) -> bool {
        self.is_ok()
    }

    fn message(&self) -> String {
        match self {
            Ok(outcome) => outcome.message.clone(),
            Err(e) => e.to_string(),
        }
    }
}

pub struct Tracker<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: DayStore> Tracker<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: DayStore, C: Clock> Tracker<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Tracker { store, clock }
    }

    /// Starts tracking for today.
    pub fn start(&self) -> TrackerResult {
        let now = self.clock.now();
        let (day, created) = self.ensure_active_day(now);
        if !created {
            return Err(TrackerError::AlreadyStarted);
        }

        self.save(&day)?;
        debug!(date = %day.key(), "day started");
        Ok(TrackerOutcome::new(Message::DayStarted(format_time(&now)), day))
    }

    /// Stops today's day, closing the running span, and totals time per task.
    pub fn stop(&self) -> TrackerResult {
        let now = self.clock.now();
        let mut day = match self.store.load(now.date()) {
            Some(day) if day.is_active() => day,
            _ => return Err(TrackerError::NotStarted),
        };

        let at = day.not_before(now);
        day.close_open_span(at);
        day.end_time = Some(at);
        self.save(&day)?;

        let totals = day.spans.task_totals(None);
        let message = Message::DayStoppedWithTotal {
            time: format_time(&at),
            total: format_duration(&day.tracked_duration(at)),
        };
        debug!(date = %day.key(), tasks = totals.len(), "day stopped");
        Ok(TrackerOutcome::new(message, day).with_totals(totals))
    }

    /// Makes `task` the running task, starting the day first if needed.
    pub fn switch_to(&self, task: &str) -> TrackerResult {
        let now = self.clock.now();
        let (mut day, _) = self.ensure_active_day(now);

        if day.current_task.as_deref() == Some(task) {
            return Ok(TrackerOutcome::new(Message::AlreadyWorkingOn(task.to_string()), day));
        }

        let at = day.not_before(now);
        day.open_span(task, at);
        self.save(&day)?;
        debug!(date = %day.key(), task, spans = day.spans.len(), "switched task");
        Ok(TrackerOutcome::new(
            Message::SwitchedTo {
                task: task.to_string(),
                time: format_time(&at),
            },
            day,
        ))
    }

    /// Totals for today, counting a running span up to now. Works for
    /// running and stopped days alike; never writes.
    pub fn get_report_data(&self) -> TrackerResult {
        let now = self.clock.now();
        let day = match self.store.load(now.date()) {
            Some(day) if day.start_time.is_some() => day,
            _ => return Err(TrackerError::NotStarted),
        };

        let totals = day.spans.task_totals(Some(now));
        Ok(TrackerOutcome::new(Message::ReportRetrieved, day).with_totals(totals))
    }

    /// Today's day if it is running.
    pub fn get_current_day(&self) -> Option<Day> {
        self.store.load(self.clock.now().date()).filter(Day::is_active)
    }

    /// The clock reading operations use; exposed for front ends that show
    /// live durations alongside a report.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Today's running day, or a fresh one beginning at `now`. The flag is
    /// true when the day was created here; nothing is persisted.
    fn ensure_active_day(&self, now: NaiveDateTime) -> (Day, bool) {
        match self.store.load(now.date()) {
            Some(day) if day.is_active() => (day, false),
            _ => (Day::begin(now), true),
        }
    }

    fn save(&self, day: &Day) -> Result<(), TrackerError> {
        self.store.save(day).map_err(TrackerError::Storage)
    }
}
