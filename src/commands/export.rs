//! Cycle-time report export.
//!
//! ```bash
//! # CSV next to the working directory with a generated name
//! workhours export tickets.csv
//!
//! # Excel with an SLA column
//! workhours export tickets.csv --format excel --sla-hours 16 --output difot.xlsx
//! ```

use super::WorkdayArgs;
use crate::{
    libs::{
        config::Config,
        cycle_time::{CycleOptions, CycleReport},
        export::{ExportFormat, Exporter},
        messages::Message,
        tickets::Tickets,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// CSV file with columns id, created, closed and optionally name
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path, generated from the current time when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// SLA threshold in working hours
    #[arg(long)]
    sla_hours: Option<f64>,

    /// Fail on the first unreadable timestamp
    #[arg(long)]
    strict: bool,

    /// Write durations as workdays, e.g. "1d 4h"
    #[arg(long)]
    days: bool,

    #[command(flatten)]
    workday: WorkdayArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let report_config = config.report();
    let calculator = args.workday.calculator(&config)?;

    let tickets = Tickets::read(&args.file)?;
    msg_info!(Message::TicketsLoaded(tickets.len(), args.file.display().to_string()));

    let options = CycleOptions {
        sla_hours: args.sla_hours.or(report_config.sla_hours),
        strict: args.strict,
        show_days: args.days || report_config.show_days,
    };
    let report = CycleReport::build(&tickets, &calculator, options)?;

    msg_info!(Message::ExportingData(format!("{:?}", args.format)));
    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&report)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
