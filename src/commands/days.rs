use super::WorkdayArgs;
use crate::{
    libs::{config::Config, messages::Message},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DaysArgs {
    /// Start timestamp (ISO-8601)
    start: String,

    /// End timestamp (ISO-8601)
    end: String,

    /// Fail on unreadable timestamps instead of reporting zero
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    workday: WorkdayArgs,
}

/// Counts weekdays between the two timestamps. Only the time zone setting
/// affects the result; window hours and the daily cap do not.
pub fn cmd(args: DaysArgs) -> Result<()> {
    let calculator = args.workday.calculator(&Config::read()?)?;

    let days = if args.strict {
        calculator
            .try_days(args.start.as_str(), args.end.as_str())
            .map_err(|e| msg_error_anyhow!(e))?
    } else {
        calculator.days(args.start.as_str(), args.end.as_str())
    };

    msg_print!(Message::WorkingDaysResult(days));
    Ok(())
}
