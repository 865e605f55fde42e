use super::tracker;
use crate::libs::{messages::Message, view::View};
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let outcome = tracker()?.stop()?;
    msg_success!(outcome.message);

    match outcome.task_totals {
        Some(totals) if !totals.is_empty() => View::tasks(&totals, None),
        _ => msg_info!(Message::NoTasksRecorded),
    }

    Ok(())
}
