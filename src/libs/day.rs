//! Day and span records.
//!
//! A [`Day`] is keyed by its calendar date and holds the ordered list of
//! [`Span`]s worked on that date. At most one span is open (has no end) at
//! any time, and when a task is selected the last span belongs to it.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date key format shared by every store backend.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contiguous interval of work on one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub task: String,
    pub start: NaiveDateTime,
    /// `None` while the span is still in progress.
    pub end: Option<NaiveDateTime>,
}

impl Span {
    pub fn open(task: &str, start: NaiveDateTime) -> Self {
        Span {
            task: task.to_string(),
            start,
            end: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of the span, treating an open span as ending at `until`.
    /// Returns `None` for an open span when no `until` is given.
    pub fn duration(&self, until: Option<NaiveDateTime>) -> Option<Duration> {
        self.end.or(until).map(|end| end - self.start)
    }
}

/// The tracking record for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub current_task: Option<String>,
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Day {
    /// A day that has never been started.
    pub fn new(date: NaiveDate) -> Self {
        Day {
            date,
            start_time: None,
            end_time: None,
            current_task: None,
            spans: Vec::new(),
        }
    }

    /// A freshly started day with no spans.
    pub fn begin(now: NaiveDateTime) -> Self {
        Day {
            start_time: Some(now),
            ..Day::new(now.date())
        }
    }

    /// The store key for this day, e.g. `2026-01-30`.
    pub fn key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Started and not yet stopped.
    pub fn is_active(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }

    /// Position of the span without an end, if there is one.
    pub fn open_span_index(&self) -> Option<usize> {
        self.spans.iter().position(Span::is_open)
    }

    /// Sets `end = at` on the open span. Returns the index that was closed.
    pub fn close_open_span(&mut self, at: NaiveDateTime) -> Option<usize> {
        let index = self.open_span_index()?;
        self.spans[index].end = Some(at);
        Some(index)
    }

    /// Closes whatever is running and opens a span for `task` at `now`.
    pub fn open_span(&mut self, task: &str, now: NaiveDateTime) {
        if self.current_task.is_some() {
            self.close_open_span(now);
        }
        self.spans.push(Span::open(task, now));
        self.current_task = Some(task.to_string());
    }

    /// `now`, moved forward to the latest instant already on record. Keeps
    /// spans ordered when the wall clock steps back (DST fall-back, manual
    /// clock changes).
    pub fn not_before(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.spans
            .iter()
            .flat_map(|span| [Some(span.start), span.end])
            .chain([self.start_time, self.end_time])
            .flatten()
            .fold(now, NaiveDateTime::max)
    }

    /// Wall time between the start of the day and its end (or `now` if the
    /// day is still running). Zero for a day that never started.
    pub fn tracked_duration(&self, now: NaiveDateTime) -> Duration {
        match self.start_time {
            Some(start) => self.end_time.unwrap_or(now) - start,
            None => Duration::zero(),
        }
    }

    /// Checks the structural invariants of a day record.
    pub fn is_consistent(&self) -> bool {
        let open = self.spans.iter().filter(|span| span.is_open()).count();
        if open > 1 {
            return false;
        }

        if self.spans.iter().any(|span| span.end.is_some_and(|end| end < span.start)) {
            return false;
        }

        if let Some(start) = self.start_time {
            let end = self.end_time.unwrap_or(NaiveDateTime::MAX);
            let in_day = |t: NaiveDateTime| t >= start && t <= end;
            if !self.spans.iter().all(|span| in_day(span.start) && span.end.map_or(true, in_day)) {
                return false;
            }
        }

        match (&self.current_task, self.spans.last()) {
            (Some(task), Some(last)) => &last.task == task && (!self.is_active() || last.is_open()),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 30).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn begin_sets_date_from_timestamp() {
        let day = Day::begin(at(9, 0));
        assert_eq!(day.key(), "2026-01-30");
        assert_eq!(day.start_time, Some(at(9, 0)));
        assert!(day.is_active());
        assert!(day.spans.is_empty());
    }

    #[test]
    fn never_started_day_is_not_active() {
        let day = Day::new(at(9, 0).date());
        assert!(!day.is_active());
        assert_eq!(day.tracked_duration(at(10, 0)), Duration::zero());
    }

    #[test]
    fn open_span_closes_previous() {
        let mut day = Day::begin(at(9, 0));
        day.open_span("coding", at(9, 0));
        day.open_span("meetings", at(10, 0));

        assert_eq!(day.open_span_index(), Some(1));
        assert_eq!(day.spans[0].end, Some(at(10, 0)));
        assert_eq!(day.current_task.as_deref(), Some("meetings"));
        assert!(day.is_consistent());
    }

    #[test]
    fn close_open_span_without_open_span() {
        let mut day = Day::begin(at(9, 0));
        assert_eq!(day.close_open_span(at(10, 0)), None);
    }

    #[test]
    fn inconsistent_when_two_spans_open() {
        let mut day = Day::begin(at(9, 0));
        day.spans.push(Span::open("a", at(9, 0)));
        day.spans.push(Span::open("b", at(9, 30)));
        day.current_task = Some("b".to_string());
        assert!(!day.is_consistent());
    }

    #[test]
    fn not_before_ignores_backward_steps() {
        let mut day = Day::begin(at(1, 0));
        assert_eq!(day.not_before(at(0, 30)), at(1, 0));

        day.open_span("a", at(1, 50));
        assert_eq!(day.not_before(at(1, 10)), at(1, 50));
        assert_eq!(day.not_before(at(2, 0)), at(2, 0));
    }

    #[test]
    fn span_duration_uses_until_for_open_span() {
        let span = Span::open("coding", at(9, 0));
        assert_eq!(span.duration(None), None);
        assert_eq!(span.duration(Some(at(9, 45))), Some(Duration::minutes(45)));
    }
}
