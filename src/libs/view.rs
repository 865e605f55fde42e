use crate::libs::formatter::{format_seconds, percentage};
use crate::libs::summary::{sorted_totals, total_seconds, TaskTotals};
use prettytable::{format, row, Table};

/// Untracked time below this many seconds is rounding noise and is not shown.
const MIN_UNTRACKED_SECONDS: i64 = 1;

pub struct View {}

impl View {
    /// Task table: longest task first, an `untracked` row when the day ran
    /// longer than the tasks account for, and a total row.
    pub fn task_table(totals: &TaskTotals, day_seconds: Option<i64>) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["TASK", r->"DURATION", r->"%"]);

        let task_sum = total_seconds(totals);
        let base = day_seconds.unwrap_or(task_sum);

        for (task, seconds) in sorted_totals(totals) {
            table.add_row(row![task, r->format_seconds(seconds), r->format!("{:.1}%", percentage(seconds, base))]);
        }

        if let Some(day_seconds) = day_seconds {
            let untracked = day_seconds - task_sum;
            if untracked >= MIN_UNTRACKED_SECONDS {
                table.add_row(row!["untracked", r->format_seconds(untracked), r->format!("{:.1}%", percentage(untracked, base))]);
            }
        }

        table.add_row(row![b->"Total", rb->format_seconds(base), rb->"100.0%"]);
        table
    }

    pub fn tasks(totals: &TaskTotals, day_seconds: Option<i64>) {
        Self::task_table(totals, day_seconds).printstd();
    }
}
