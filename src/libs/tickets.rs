//! Ticket records read from CSV exports.
//!
//! The expected layout is a header row followed by one ticket per line:
//!
//! ```text
//! id,name,created,closed
//! HD-101,Printer offline,2024-01-08 10:00:00,2024-01-08 15:00:00
//! HD-102,VPN access,2024-01-09T09:30:00,
//! ```
//!
//! `name` is optional. An empty `closed` cell marks the ticket as still open.
//! Timestamps are kept as text here and only interpreted by the calculator.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub created: String,
    #[serde(default)]
    pub closed: Option<String>,
}

impl Ticket {
    pub fn new(id: &str, created: &str, closed: Option<&str>) -> Self {
        Ticket {
            id: id.to_string(),
            name: None,
            created: created.to_string(),
            closed: closed.map(str::to_string),
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }
}

pub struct Tickets;

impl Tickets {
    /// Loads every ticket from the CSV file at `path`.
    pub fn read(path: &Path) -> Result<Vec<Ticket>> {
        let file = std::fs::File::open(path).with_context(|| format!("Failed to open ticket file {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("Failed to parse ticket file {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Ticket>> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut tickets = Vec::new();
        for (index, record) in rdr.deserialize::<Ticket>().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let ticket = record.with_context(|| format!("Invalid ticket on line {}", index + 2))?;
            tickets.push(ticket);
        }
        tracing::debug!(count = tickets.len(), "tickets loaded");
        Ok(tickets)
    }
}
