pub mod export;
pub mod init;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
pub mod switch;

use crate::libs::config::Config;
use crate::libs::store::{self, DayStore};
use crate::libs::tracker::Tracker;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure where tracking data is stored")]
    Init(init::InitArgs),
    #[command(about = "Start tracking time for the day")]
    Start,
    #[command(about = "Stop tracking time and show the daily summary")]
    Stop,
    #[command(name = "switch-to", about = "Switch to a task (starts the day if needed)", arg_required_else_help = true)]
    SwitchTo(switch::SwitchArgs),
    #[command(about = "Show the time report for the current day")]
    Report(report::ReportArgs),
    #[command(about = "Show the running day and task")]
    Status,
    #[command(about = "Export the current day's report to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start => start::cmd(),
            Commands::Stop => stop::cmd(),
            Commands::SwitchTo(args) => switch::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Tracker over the store named in the configuration, on the system clock.
pub fn tracker() -> Result<Tracker<Box<dyn DayStore>>> {
    let config = Config::read()?;
    Ok(Tracker::new(store::open(&config.storage())?))
}
