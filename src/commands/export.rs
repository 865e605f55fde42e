//! Writes the current day's report to a CSV or JSON file.

use super::tracker;
use crate::libs::{
    export::{ExportFormat, ExportReport, Exporter},
    messages::Message,
};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `tsurf_report_<timestamp>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let tracker = tracker()?;
    let outcome = tracker.get_report_data()?;
    let totals = outcome.task_totals.unwrap_or_default();
    let day = outcome.day;

    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(&ExportReport::new(&day, &totals, tracker.now()))?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
