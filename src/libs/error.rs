//! Error types for the working-hours calculator and its configuration.

use thiserror::Error;

/// Failure while computing a working-hours or working-days figure.
///
/// Only the strict entry points (`try_hours`, `try_days`) surface these. The
/// lenient ones log the error and report zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkingHoursError {
    /// Input could not be read as a point in time.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// The span between the two timestamps exceeds the walk ceiling.
    #[error("span of {days} days exceeds the limit of {limit} days")]
    SpanTooLong { days: i64, limit: i64 },
}

/// Rejected workday configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),

    #[error("workday must end after it starts (start {start}, end {end})")]
    EmptyWindow { start: u32, end: u32 },

    #[error("hours per work day must be greater than 0 and at most 24, got {0}")]
    InvalidHoursPerDay(f64),

    #[error("unrecognised time zone {0:?}, expected \"local\", \"UTC\" or an offset like \"+10:00\"")]
    InvalidTimeZone(String),
}
