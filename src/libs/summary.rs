use crate::libs::day::Span;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Task label to accumulated whole seconds.
pub type TaskTotals = HashMap<String, i64>;

pub trait TaskTotalsCalculator {
    /// Sums span durations per task. Open spans count up to `open_until`,
    /// or are skipped when it is `None`.
    fn task_totals(&self, open_until: Option<NaiveDateTime>) -> TaskTotals;
}

impl TaskTotalsCalculator for [Span] {
    fn task_totals(&self, open_until: Option<NaiveDateTime>) -> TaskTotals {
        self.iter().fold(TaskTotals::new(), |mut totals, span| {
            if let Some(duration) = span.duration(open_until) {
                *totals.entry(span.task.clone()).or_insert(0) += duration.num_seconds().max(0);
            }
            totals
        })
    }
}

/// Totals ordered longest first; ties break on the task label so output is stable.
pub fn sorted_totals(totals: &TaskTotals) -> Vec<(String, i64)> {
    let mut sorted: Vec<(String, i64)> = totals.iter().map(|(task, seconds)| (task.clone(), *seconds)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

pub fn total_seconds(totals: &TaskTotals) -> i64 {
    totals.values().sum()
}
