use super::WorkdayArgs;
use crate::{
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Number of working hours, e.g. 12.5
    hours: String,

    /// Show as workdays plus hours, e.g. "1d 4h"
    #[arg(long)]
    days: bool,

    #[command(flatten)]
    workday: WorkdayArgs,
}

pub fn cmd(args: FormatArgs) -> Result<()> {
    let hours: f64 = match args.hours.trim().parse() {
        Ok(hours) => hours,
        Err(_) => msg_bail_anyhow!(Message::InvalidHoursValue(args.hours.clone())),
    };
    let calculator = args.workday.calculator(&Config::read()?)?;

    msg_print!(Message::FormattedHours(calculator.format(hours, args.days)));
    Ok(())
}
