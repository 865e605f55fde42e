use super::tracker;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let outcome = tracker()?.start()?;
    msg_success!(outcome.message);
    Ok(())
}
