//! Machine-readable renditions of a day report.
//!
//! The same [`ExportReport`] backs `report --format json|csv` on stdout and
//! the `export` command writing to a file.

use crate::libs::day::Day;
use crate::libs::formatter::{format_seconds, percentage};
use crate::libs::summary::{sorted_totals, total_seconds, TaskTotals};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    pub task: String,
    pub seconds: i64,
    pub duration: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub current_task: Option<String>,
    /// Wall time of the day so far.
    pub day_seconds: i64,
    /// Sum over all tasks.
    pub tracked_seconds: i64,
    pub tasks: Vec<ExportTask>,
}

impl ExportReport {
    pub fn new(day: &Day, totals: &TaskTotals, now: NaiveDateTime) -> Self {
        let tracked_seconds = total_seconds(totals);
        let tasks = sorted_totals(totals)
            .into_iter()
            .map(|(task, seconds)| ExportTask {
                task,
                seconds,
                duration: format_seconds(seconds),
                percentage: (percentage(seconds, tracked_seconds) * 10.0).round() / 10.0,
            })
            .collect();

        ExportReport {
            date: day.key(),
            start_time: day.start_time.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            end_time: day.end_time.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            current_task: day.current_task.clone(),
            day_seconds: day.tracked_duration(now).num_seconds(),
            tracked_seconds,
            tasks,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One row per task plus a trailing total row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Date", "Task", "Seconds", "Duration", "Percentage"])?;
        for task in &self.tasks {
            wtr.write_record([
                self.date.clone(),
                task.task.clone(),
                task.seconds.to_string(),
                task.duration.clone(),
                format!("{:.1}", task.percentage),
            ])?;
        }
        wtr.write_record([
            self.date.clone(),
            "Total".to_string(),
            self.tracked_seconds.to_string(),
            format_seconds(self.tracked_seconds),
            "100.0".to_string(),
        ])?;
        wtr.flush()?;
        Ok(())
    }
}

/// Writes reports to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `tsurf_report_<timestamp>.<ext>`
    /// in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path
            .unwrap_or_else(|| PathBuf::from(format!("tsurf_report_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, report: &ExportReport) -> Result<()> {
        match self.format {
            ExportFormat::Csv => report.write_csv(File::create(&self.output_path)?),
            ExportFormat::Json => {
                let mut file = File::create(&self.output_path)?;
                file.write_all(report.to_json()?.as_bytes())?;
                Ok(())
            }
        }
    }
}
