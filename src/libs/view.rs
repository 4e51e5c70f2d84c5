use super::cycle_time::CycleReport;
use super::export::{on_time_label, summary_lines};
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn cycle_report(report: &CycleReport) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CREATED", "CLOSED", "STATUS", "DURATION", "ON TIME"]);
        for ticket in &report.rows {
            table.add_row(row![
                ticket.id,
                ticket.name,
                ticket.created,
                ticket.closed,
                ticket.status,
                ticket.formatted,
                on_time_label(ticket.on_time)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn cycle_summary(report: &CycleReport) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();
        for (label, value) in summary_lines(&report.summary) {
            table.add_row(row![label, value]);
        }
        table.printstd();

        Ok(())
    }
}
