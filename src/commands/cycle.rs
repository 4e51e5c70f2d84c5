//! Cycle-time report for a CSV file of tickets.
//!
//! Each closed ticket's created/closed pair is converted to working hours;
//! the table lists every ticket and the summary aggregates the closed ones.
//! With an SLA threshold (flag or saved report config) the summary also
//! reports how many tickets closed within it.

use super::WorkdayArgs;
use crate::{
    libs::{
        config::Config,
        cycle_time::{CycleOptions, CycleReport},
        messages::Message,
        tickets::Tickets,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CycleArgs {
    /// CSV file with columns id, created, closed and optionally name
    file: PathBuf,

    /// SLA threshold in working hours
    #[arg(long)]
    sla_hours: Option<f64>,

    /// Fail on the first unreadable timestamp
    #[arg(long)]
    strict: bool,

    /// Show durations as workdays, e.g. "1d 4h"
    #[arg(long)]
    days: bool,

    #[command(flatten)]
    workday: WorkdayArgs,
}

pub fn cmd(args: CycleArgs) -> Result<()> {
    let config = Config::read()?;
    let report_config = config.report();
    let calculator = args.workday.calculator(&config)?;

    let tickets = Tickets::read(&args.file)?;
    let path = args.file.display().to_string();
    if tickets.is_empty() {
        msg_info!(Message::NoTicketsFound(path));
        return Ok(());
    }
    msg_print!(Message::ActiveWindow(calculator.config().to_string()));

    let options = CycleOptions {
        sla_hours: args.sla_hours.or(report_config.sla_hours),
        strict: args.strict,
        show_days: args.days || report_config.show_days,
    };
    let report = CycleReport::build(&tickets, &calculator, options)?;

    msg_print!(Message::CycleReportHeader(path), true);
    View::cycle_report(&report).map_err(|e| msg_error_anyhow!(e))?;
    msg_print!(Message::CycleSummaryHeader, true);
    View::cycle_summary(&report).map_err(|e| msg_error_anyhow!(e))?;

    if report.summary.invalid > 0 {
        msg_warning!(Message::TicketsSkipped(report.summary.invalid));
    }
    Ok(())
}
