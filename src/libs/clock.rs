//! Sources of "now" for the tracker.
//!
//! Every tracker operation reads the wall clock exactly once. Passing the
//! clock in as a value lets tests and scripted runs pin time to a known
//! instant instead of patching a global.

use chrono::{Local, NaiveDateTime, Timelike};
use std::cell::Cell;

/// Represents an entity responsible for providing the current local time.
pub trait Clock {
    /// Current local wall-clock time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the system clock in local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock that stays where it is put.
///
/// ```rust
/// use chrono::NaiveDate;
/// use tsurf::libs::clock::{Clock, FixedClock};
///
/// let nine = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let clock = FixedClock::new(nine);
/// assert_eq!(clock.now(), nine);
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Moves the clock to `now`. Nothing stops it from going backwards.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
