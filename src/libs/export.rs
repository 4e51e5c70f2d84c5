//! Cycle-time report export.
//!
//! Writes a [`CycleReport`] to disk for dashboards and spreadsheets:
//!
//! - **CSV**: a ticket section followed by a summary section
//! - **JSON**: the full report, rows and summary, pretty-printed
//! - **Excel**: one worksheet with bold headers and autofit columns
//!
//! Without an explicit output path the file is named
//! `workhours_export_<YYYYmmdd_HHMMSS>.<ext>` in the working directory.
//!
//! ```rust,no_run
//! use workhours::libs::cycle_time::{CycleOptions, CycleReport};
//! use workhours::libs::export::{ExportFormat, Exporter};
//! use workhours::libs::working_hours::WorkingHours;
//!
//! let report = CycleReport::build(&[], &WorkingHours::default(), CycleOptions::default())?;
//! Exporter::new(ExportFormat::Csv, None).export(&report)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::cycle_time::{CycleReport, CycleSummary};
use super::formatter::format_hours_clock;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("workhours_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, report: &CycleReport) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(report),
            ExportFormat::Json => self.export_json(report),
            ExportFormat::Excel => self.export_excel(report),
        }
    }

    fn export_csv(&self, report: &CycleReport) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(["TICKETS"])?;
        wtr.write_record(["ID", "Name", "Created", "Closed", "Status", "Working Hours", "Duration", "On Time"])?;
        for row in &report.rows {
            wtr.write_record([
                row.id.clone(),
                row.name.clone(),
                row.created.clone(),
                row.closed.clone(),
                row.status.to_string(),
                format!("{:.2}", row.hours),
                row.formatted.clone(),
                on_time_label(row.on_time).to_string(),
            ])?;
        }

        wtr.write_record([""])?;
        wtr.write_record(["SUMMARY"])?;
        for (label, value) in summary_lines(&report.summary) {
            wtr.write_record([label, value.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, report: &CycleReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, report: &CycleReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "TICKETS", &header_format)?;
        let headers = ["ID", "Name", "Created", "Closed", "Status", "Working Hours", "Duration", "On Time"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(1, col as u16, *header, &header_format)?;
        }

        let mut row = 2;
        for ticket in &report.rows {
            worksheet.write_string(row, 0, &ticket.id)?;
            worksheet.write_string(row, 1, &ticket.name)?;
            worksheet.write_string(row, 2, &ticket.created)?;
            worksheet.write_string(row, 3, &ticket.closed)?;
            worksheet.write_string(row, 4, ticket.status.to_string())?;
            worksheet.write_number(row, 5, ticket.hours)?;
            worksheet.write_string(row, 6, &ticket.formatted)?;
            worksheet.write_string(row, 7, on_time_label(ticket.on_time))?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        row += 1;
        for (label, value) in summary_lines(&report.summary) {
            worksheet.write_string(row, 0, label)?;
            worksheet.write_string(row, 1, &value)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

/// `"yes"`/`"no"` against the SLA, empty when no SLA applies.
pub fn on_time_label(on_time: Option<bool>) -> &'static str {
    match on_time {
        Some(true) => "yes",
        Some(false) => "no",
        None => "",
    }
}

/// Label/value pairs shared by the CSV and Excel summary sections.
pub fn summary_lines(summary: &CycleSummary) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Closed Tickets", summary.closed.to_string()),
        ("Open Tickets", summary.open.to_string()),
        ("Invalid Tickets", summary.invalid.to_string()),
        ("Total Hours", format_hours_clock(summary.total_hours)),
        ("Average Hours", format_hours_clock(summary.average_hours)),
        ("Median Hours", format_hours_clock(summary.median_hours)),
    ];
    if let (Some(sla), Some(on_time), Some(rate)) = (summary.sla_hours, summary.on_time, summary.on_time_rate) {
        lines.push(("SLA Hours", format!("{:.1}", sla)));
        lines.push(("On Time", on_time.to_string()));
        lines.push(("On Time Rate", format!("{:.1}%", rate)));
    }
    lines
}
