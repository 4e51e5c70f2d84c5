//! Ticket cycle-time reporting.
//!
//! Feeds each ticket's created/closed pair through the calculator and
//! aggregates the results for KPI display: totals, average, median and, when
//! an SLA threshold is given, the share of tickets closed within it (the
//! DIFOT-style on-time rate).
//!
//! Aggregation lives here on purpose; the calculator itself only ever answers
//! for a single pair of timestamps.
//!
//! ## Status rules
//!
//! - **Closed**: both timestamps readable, counted in every aggregate
//! - **Open**: no closed timestamp, listed but not aggregated
//! - **Invalid**: a timestamp could not be read; in lenient mode the row is
//!   kept with zero hours and excluded from aggregates, in strict mode the
//!   whole report fails

use super::messages::Message;
use super::tickets::Ticket;
use super::working_hours::WorkingHours;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Closed,
    Open,
    Invalid,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            TicketStatus::Closed => "closed",
            TicketStatus::Open => "open",
            TicketStatus::Invalid => "invalid",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CycleOptions {
    /// Maximum working hours for a ticket to count as on time.
    pub sla_hours: Option<f64>,
    /// Fail on the first unreadable timestamp instead of zeroing the row.
    pub strict: bool,
    /// Render formatted durations as workdays (`"1d 4h"`).
    pub show_days: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleTimeRow {
    pub id: String,
    pub name: String,
    pub created: String,
    pub closed: String,
    pub hours: f64,
    pub formatted: String,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_time: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleSummary {
    pub closed: usize,
    pub open: usize,
    pub invalid: usize,
    pub total_hours: f64,
    pub average_hours: f64,
    pub median_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_time: Option<usize>,
    /// Percentage (0-100) of closed tickets within the SLA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_time_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub rows: Vec<CycleTimeRow>,
    pub summary: CycleSummary,
}

impl CycleReport {
    pub fn build(tickets: &[Ticket], calculator: &WorkingHours, options: CycleOptions) -> Result<Self> {
        let mut rows = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            rows.push(Self::row(ticket, calculator, &options)?);
        }
        let summary = summarize(&rows, options.sla_hours);
        Ok(CycleReport { rows, summary })
    }

    fn row(ticket: &Ticket, calculator: &WorkingHours, options: &CycleOptions) -> Result<CycleTimeRow> {
        let (hours, status) = match &ticket.closed {
            None => (0.0, TicketStatus::Open),
            Some(closed) => match calculator.try_hours(ticket.created.as_str(), closed.as_str()) {
                Ok(hours) => (hours, TicketStatus::Closed),
                Err(e) if options.strict => {
                    return Err(msg_error_anyhow!(Message::TicketTimestampInvalid(ticket.id.clone(), e.to_string())));
                }
                Err(e) => {
                    tracing::warn!(ticket = %ticket.id, error = %e, "ticket excluded from cycle-time aggregates");
                    (0.0, TicketStatus::Invalid)
                }
            },
        };

        let on_time = match (status, options.sla_hours) {
            (TicketStatus::Closed, Some(sla)) => Some(hours <= sla),
            _ => None,
        };

        Ok(CycleTimeRow {
            id: ticket.id.clone(),
            name: ticket.name.clone().unwrap_or_default(),
            created: ticket.created.clone(),
            closed: ticket.closed.clone().unwrap_or_default(),
            hours,
            formatted: match status {
                TicketStatus::Open => "-".to_string(),
                _ => calculator.format(hours, options.show_days),
            },
            status,
            on_time,
        })
    }
}

/// Aggregates closed rows. Open and invalid rows are only counted.
pub fn summarize(rows: &[CycleTimeRow], sla_hours: Option<f64>) -> CycleSummary {
    let mut closed: Vec<f64> = rows
        .iter()
        .filter(|row| row.status == TicketStatus::Closed)
        .map(|row| row.hours)
        .collect();
    closed.sort_by(f64::total_cmp);

    let count = closed.len();
    let total_hours: f64 = closed.iter().sum();
    let average_hours = if count > 0 { total_hours / count as f64 } else { 0.0 };

    let on_time = sla_hours.map(|sla| closed.iter().filter(|&&hours| hours <= sla).count());
    let on_time_rate = on_time.map(|n| if count > 0 { n as f64 * 100.0 / count as f64 } else { 0.0 });

    CycleSummary {
        closed: count,
        open: rows.iter().filter(|row| row.status == TicketStatus::Open).count(),
        invalid: rows.iter().filter(|row| row.status == TicketStatus::Invalid).count(),
        total_hours,
        average_hours,
        median_hours: median(&closed),
        sla_hours,
        on_time,
        on_time_rate,
    }
}

/// Median of an already sorted slice, `0.0` when empty.
fn median(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    match len {
        0 => 0.0,
        _ if len % 2 == 1 => sorted[len / 2],
        _ => (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0,
    }
}
