//! Working hours between two timestamps.
//!
//! ```bash
//! workhours hours 2024-01-05T16:00:00 2024-01-08T10:00:00
//! workhours hours "2024-01-08 09:00" "2024-01-19 17:00" --days --tz +10:00
//! ```

use super::WorkdayArgs;
use crate::{
    libs::{config::Config, messages::Message},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Start timestamp (ISO-8601)
    start: String,

    /// End timestamp (ISO-8601)
    end: String,

    /// Fail on unreadable timestamps instead of reporting zero
    #[arg(long)]
    strict: bool,

    /// Show the duration as workdays, e.g. "1d 4h"
    #[arg(long)]
    days: bool,

    #[command(flatten)]
    workday: WorkdayArgs,
}

pub fn cmd(args: HoursArgs) -> Result<()> {
    let config = Config::read()?;
    let calculator = args.workday.calculator(&config)?;
    let show_days = args.days || config.report().show_days;

    let hours = if args.strict {
        calculator
            .try_hours(args.start.as_str(), args.end.as_str())
            .map_err(|e| msg_error_anyhow!(e))?
    } else {
        calculator.hours(args.start.as_str(), args.end.as_str())
    };

    msg_print!(Message::WorkingHoursResult(format!("{:.2}", hours), calculator.format(hours, show_days)));
    Ok(())
}
