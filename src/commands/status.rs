use super::tracker;
use crate::libs::{formatter::format_time, messages::Message};
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let Some(day) = tracker()?.get_current_day() else {
        msg_info!(Message::NoActiveDay);
        return Ok(());
    };

    if let Some(start) = day.start_time {
        msg_print!(Message::ActiveSince(format_time(&start)));
    }

    let running = day.open_span_index().map(|index| &day.spans[index]);
    match running {
        Some(span) => msg_print!(Message::CurrentTask {
            task: span.task.clone(),
            since: format_time(&span.start),
        }),
        None => msg_print!(Message::NoCurrentTask),
    }

    Ok(())
}
