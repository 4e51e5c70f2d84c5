//! Display implementation for workhours messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! between the CLI commands, the config wizard and error output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CALCULATION MESSAGES ===
            Message::WorkingHoursResult(hours, label) => format!("Working hours: {} ({})", hours, label),
            Message::WorkingDaysResult(days) => format!("Working days: {}", days),
            Message::FormattedHours(label) => label.clone(),
            Message::InvalidHoursValue(value) => format!("Not a number of hours: {}", value),
            Message::ActiveWindow(window) => format!("Workday window: {}", window),

            // === TICKET MESSAGES ===
            Message::TicketsLoaded(count, path) => format!("Loaded {} tickets from {}", count, path),
            Message::NoTicketsFound(path) => format!("No tickets found in {}", path),
            Message::TicketTimestampInvalid(id, error) => format!("Ticket {} has an unreadable timestamp: {}", id, error),
            Message::TicketsSkipped(count) => format!("{} tickets had unreadable timestamps and were left out of the summary", count),
            Message::CycleReportHeader(path) => format!("Cycle times for {}", path),
            Message::CycleSummaryHeader => "Summary:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No saved configuration, nothing to remove".to_string(),
            Message::ConfigInvalid(error) => format!("Invalid workday configuration: {}", error),
            Message::ConfigModuleWorkday => "Workday settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting cycle-time report as {}...", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptWorkDayStartHour => "Workday start hour (0-23)".to_string(),
            Message::PromptWorkDayEndHour => "Workday end hour (0-23)".to_string(),
            Message::PromptHoursPerWorkDay => "Productive hours per workday".to_string(),
            Message::PromptTimeZone => "Time zone (\"local\", \"UTC\" or an offset like +10:00)".to_string(),
            Message::PromptSlaHours => "SLA threshold in working hours (0 to disable)".to_string(),
            Message::PromptShowDays => "Show durations as workdays".to_string(),
        };

        write!(f, "{}", text)
    }
}
