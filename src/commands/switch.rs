use super::tracker;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SwitchArgs {
    /// Name of the task to switch to
    #[arg(required = true)]
    task: String,
}

pub fn cmd(switch_args: SwitchArgs) -> Result<()> {
    // The tracker takes any label; blank ones are a typo at the prompt
    if switch_args.task.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskNameEmpty);
    }

    let outcome = tracker()?.switch_to(&switch_args.task)?;
    msg_success!(outcome.message);
    Ok(())
}
