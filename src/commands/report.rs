use super::tracker;
use crate::libs::{export::ExportReport, messages::Message, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: ReportFormat,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let tracker = tracker()?;
    let outcome = tracker.get_report_data()?;
    let now = tracker.now();
    let totals = outcome.task_totals.unwrap_or_default();
    let day = outcome.day;

    match report_args.format {
        ReportFormat::Table => {
            msg_print!(Message::ReportHeader(day.key()), true);
            if totals.is_empty() {
                msg_info!(Message::NoTasksRecorded);
                return Ok(());
            }
            View::tasks(&totals, Some(day.tracked_duration(now).num_seconds()));
        }
        ReportFormat::Json => println!("{}", ExportReport::new(&day, &totals, now).to_json()?),
        ReportFormat::Csv => ExportReport::new(&day, &totals, now).write_csv(std::io::stdout().lock())?,
    }

    Ok(())
}
