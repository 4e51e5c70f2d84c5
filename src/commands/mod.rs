pub mod cycle;
pub mod days;
pub mod export;
pub mod format;
pub mod hours;
pub mod init;

use crate::libs::{
    config::Config,
    messages::Message,
    timestamp::TimeZoneSetting,
    working_hours::{WorkingHours, WorkingHoursConfig},
};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Working hours between two timestamps")]
    Hours(hours::HoursArgs),
    #[command(about = "Working days between two timestamps")]
    Days(days::DaysArgs),
    #[command(about = "Format a number of working hours", allow_negative_numbers = true)]
    Format(format::FormatArgs),
    #[command(about = "Cycle-time report for a ticket CSV file")]
    Cycle(cycle::CycleArgs),
    #[command(about = "Export a cycle-time report")]
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
            Commands::Hours(args) => hours::cmd(args),
            Commands::Days(args) => days::cmd(args),
            Commands::Format(args) => format::cmd(args),
            Commands::Cycle(args) => cycle::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Per-invocation overrides of the saved workday settings.
#[derive(Debug, Args, Default, Clone)]
pub struct WorkdayArgs {
    /// Hour the workday starts (0-23)
    #[arg(long)]
    pub start_hour: Option<u32>,

    /// Hour the workday ends (0-23)
    #[arg(long)]
    pub end_hour: Option<u32>,

    /// Cap on working hours counted per day
    #[arg(long)]
    pub hours_per_day: Option<f64>,

    /// Time zone: "local", "UTC" or an offset like "+10:00"
    #[arg(long)]
    pub tz: Option<String>,
}

impl WorkdayArgs {
    /// Applies the overrides on top of `base`, validating the result.
    pub fn apply(&self, base: WorkingHoursConfig) -> Result<WorkingHoursConfig> {
        let config = WorkingHoursConfig::new(
            self.start_hour.unwrap_or(base.work_day_start_hour()),
            self.end_hour.unwrap_or(base.work_day_end_hour()),
            self.hours_per_day.unwrap_or(base.hours_per_work_day()),
        )
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;

        let time_zone = match &self.tz {
            Some(raw) => raw
                .parse::<TimeZoneSetting>()
                .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?,
            None => base.time_zone(),
        };

        Ok(config.with_time_zone(time_zone))
    }

    /// Calculator built from the saved config plus these overrides.
    pub fn calculator(&self, config: &Config) -> Result<WorkingHours> {
        Ok(WorkingHours::new(self.apply(config.working_hours())?))
    }
}
