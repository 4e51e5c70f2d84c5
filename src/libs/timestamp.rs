//! Timestamp normalization for the working-hours calculator.
//!
//! Callers hand the calculator whatever they have on record: ISO-8601 text
//! straight from an ERP export, a `NaiveDateTime` from a database row, or a
//! zoned `DateTime`. Everything is normalized to a wall-clock
//! [`NaiveDateTime`] in the configured [`TimeZoneSetting`] before any
//! clipping happens.
//!
//! ## Accepted text formats
//!
//! - RFC 3339 with an offset: `2024-01-08T10:00:00Z`, `2024-01-08T10:00:00+10:00`
//! - Local wall-clock time: `2024-01-08T10:00:00`, `2024-01-08 10:00:00`,
//!   `2024-01-08T10:00`, with optional fractional seconds
//! - Date only: `2024-01-08` (midnight)
//!
//! Offset-bearing values are converted into the configured zone. Values
//! without an offset are taken as already being in that zone.

use super::error::{ConfigError, WorkingHoursError};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Time zone in which workday windows are applied.
///
/// `Local` follows the zone of the machine running the calculation. `Fixed`
/// pins a single business offset so results do not depend on where the
/// process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    pub fn utc() -> Self {
        TimeZoneSetting::Fixed(Utc.fix())
    }

    /// Converts a zoned instant into wall-clock time in this zone.
    pub fn wall_clock<Tz: TimeZone>(&self, value: &DateTime<Tz>) -> NaiveDateTime {
        match self {
            TimeZoneSetting::Local => value.with_timezone(&Local).naive_local(),
            TimeZoneSetting::Fixed(offset) => value.with_timezone(offset).naive_local(),
        }
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Fixed(offset) if offset.local_minus_utc() == 0 => write!(f, "UTC"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::utc()),
            _ => {}
        }

        let invalid = || ConfigError::InvalidTimeZone(s.to_string());
        let (sign, rest) = match trimmed.chars().next() {
            Some('+') => (1, &trimmed[1..]),
            Some('-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
            None => (rest, "0"),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(invalid)
    }
}

impl Serialize for TimeZoneSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeZoneSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A value the calculator can read as a point in time.
pub trait ToTimePoint {
    fn to_time_point(&self, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError>;
}

impl ToTimePoint for str {
    fn to_time_point(&self, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        parse_time_point(self, zone)
    }
}

impl ToTimePoint for String {
    fn to_time_point(&self, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        parse_time_point(self, zone)
    }
}

impl<T: ToTimePoint + ?Sized> ToTimePoint for &T {
    fn to_time_point(&self, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        (**self).to_time_point(zone)
    }
}

impl ToTimePoint for NaiveDateTime {
    fn to_time_point(&self, _zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        Ok(*self)
    }
}

impl ToTimePoint for NaiveDate {
    fn to_time_point(&self, _zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> ToTimePoint for DateTime<Tz> {
    fn to_time_point(&self, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
        Ok(zone.wall_clock(self))
    }
}

/// Parses ISO-8601 text into wall-clock time in `zone`.
pub fn parse_time_point(raw: &str, zone: &TimeZoneSetting) -> Result<NaiveDateTime, WorkingHoursError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(WorkingHoursError::InvalidTimestamp(raw.to_string()));
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
        return Ok(zone.wall_clock(&zoned));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| WorkingHoursError::InvalidTimestamp(raw.to_string()))
}
