//! Business-hours calculator.
//!
//! Counts the hours between two timestamps that fall inside the configured
//! workday window on Monday to Friday. Weekends and time outside the window
//! are skipped, never added, so the result is bounded by the wall-clock span.
//!
//! ## Entry points
//!
//! - [`WorkingHours::hours`] / [`calculate_working_hours`]: fail-soft, logs a
//!   warning and returns `0.0` for unreadable input
//! - [`WorkingHours::try_hours`]: strict, returns [`WorkingHoursError`]
//! - [`WorkingHours::days`] / [`calculate_working_days`]: weekday counter
//! - [`WorkingHours::format`] / [`format_working_hours`]: display labels
//!
//! ## Examples
//!
//! ```rust
//! use workhours::libs::working_hours::{calculate_working_hours, WorkingHours};
//!
//! // Monday 10:00 to 15:00 with the default 9-17 window
//! assert_eq!(calculate_working_hours("2024-01-08T10:00:00", "2024-01-08T15:00:00", None), 5.0);
//!
//! // Friday 16:00 to Monday 10:00: one hour each side of the weekend
//! let calc = WorkingHours::default();
//! assert_eq!(calc.hours("2024-01-05T16:00:00", "2024-01-08T10:00:00"), 2.0);
//! ```
//!
//! Public holidays are not modelled. Saturday and Sunday are the only days
//! excluded.

use super::error::{ConfigError, WorkingHoursError};
use super::formatter;
use super::timestamp::{TimeZoneSetting, ToTimePoint};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use super::formatter::format_working_hours;

pub const DEFAULT_WORK_DAY_START_HOUR: u32 = 9;
pub const DEFAULT_WORK_DAY_END_HOUR: u32 = 17;
pub const DEFAULT_HOURS_PER_WORK_DAY: f64 = 8.0;

/// Upper bound on the number of calendar days a single call will walk.
pub const MAX_SPAN_DAYS: i64 = 36_600;

/// Validated workday configuration.
///
/// Construct with [`WorkingHoursConfig::new`] or take the default 9-17 window
/// with an 8 hour cap in the local zone. Deserialization runs the same checks,
/// so a config file with an empty window is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingHoursConfig", into = "RawWorkingHoursConfig")]
pub struct WorkingHoursConfig {
    work_day_start_hour: u32,
    work_day_end_hour: u32,
    hours_per_work_day: f64,
    time_zone: TimeZoneSetting,
}

impl WorkingHoursConfig {
    pub fn new(work_day_start_hour: u32, work_day_end_hour: u32, hours_per_work_day: f64) -> Result<Self, ConfigError> {
        for hour in [work_day_start_hour, work_day_end_hour] {
            if hour > 23 {
                return Err(ConfigError::InvalidHour(hour));
            }
        }
        if work_day_end_hour <= work_day_start_hour {
            return Err(ConfigError::EmptyWindow {
                start: work_day_start_hour,
                end: work_day_end_hour,
            });
        }
        if !hours_per_work_day.is_finite() || hours_per_work_day <= 0.0 || hours_per_work_day > 24.0 {
            return Err(ConfigError::InvalidHoursPerDay(hours_per_work_day));
        }

        Ok(Self {
            work_day_start_hour,
            work_day_end_hour,
            hours_per_work_day,
            time_zone: TimeZoneSetting::Local,
        })
    }

    pub fn with_time_zone(mut self, time_zone: TimeZoneSetting) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn work_day_start_hour(&self) -> u32 {
        self.work_day_start_hour
    }

    pub fn work_day_end_hour(&self) -> u32 {
        self.work_day_end_hour
    }

    pub fn hours_per_work_day(&self) -> f64 {
        self.hours_per_work_day
    }

    pub fn time_zone(&self) -> TimeZoneSetting {
        self.time_zone
    }

    /// Workday window `[start, end]` on `date`.
    fn window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (
            date.and_time(hour_of_day(self.work_day_start_hour)),
            date.and_time(hour_of_day(self.work_day_end_hour)),
        )
    }
}

impl fmt::Display for WorkingHoursConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:00-{:02}:00, {} hours per day, {}",
            self.work_day_start_hour, self.work_day_end_hour, self.hours_per_work_day, self.time_zone
        )
    }
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            work_day_start_hour: DEFAULT_WORK_DAY_START_HOUR,
            work_day_end_hour: DEFAULT_WORK_DAY_END_HOUR,
            hours_per_work_day: DEFAULT_HOURS_PER_WORK_DAY,
            time_zone: TimeZoneSetting::Local,
        }
    }
}

/// On-disk shape of [`WorkingHoursConfig`]. Missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawWorkingHoursConfig {
    #[serde(default = "default_start_hour")]
    work_day_start_hour: u32,
    #[serde(default = "default_end_hour")]
    work_day_end_hour: u32,
    #[serde(default = "default_hours_per_day")]
    hours_per_work_day: f64,
    #[serde(default)]
    time_zone: TimeZoneSetting,
}

fn default_start_hour() -> u32 {
    DEFAULT_WORK_DAY_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_WORK_DAY_END_HOUR
}

fn default_hours_per_day() -> f64 {
    DEFAULT_HOURS_PER_WORK_DAY
}

impl TryFrom<RawWorkingHoursConfig> for WorkingHoursConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWorkingHoursConfig) -> Result<Self, Self::Error> {
        Ok(WorkingHoursConfig::new(raw.work_day_start_hour, raw.work_day_end_hour, raw.hours_per_work_day)?
            .with_time_zone(raw.time_zone))
    }
}

impl From<WorkingHoursConfig> for RawWorkingHoursConfig {
    fn from(config: WorkingHoursConfig) -> Self {
        Self {
            work_day_start_hour: config.work_day_start_hour,
            work_day_end_hour: config.work_day_end_hour,
            hours_per_work_day: config.hours_per_work_day,
            time_zone: config.time_zone,
        }
    }
}

/// Calculator bound to one [`WorkingHoursConfig`].
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkingHours {
    config: WorkingHoursConfig,
}

impl WorkingHours {
    pub fn new(config: WorkingHoursConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkingHoursConfig {
        &self.config
    }

    /// Working hours between `start` and `end`, or `0.0` when either input
    /// is unreadable (a warning is logged).
    ///
    /// A span longer than [`MAX_SPAN_DAYS`] is cut at the ceiling instead of
    /// failing, so the result never drops as `end` grows.
    pub fn hours<S, E>(&self, start: &S, end: &E) -> f64
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        match self.lenient_span(start, end) {
            Some((start, end)) => self.sum_hours(start, end),
            None => 0.0,
        }
    }

    /// Strict form of [`WorkingHours::hours`]. Spans past the ceiling are an
    /// error here.
    pub fn try_hours<S, E>(&self, start: &S, end: &E) -> Result<f64, WorkingHoursError>
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        let (start, end) = self.strict_span(start, end)?;
        Ok(self.sum_hours(start, end))
    }

    /// Weekdays between `start` and `end`, or `0` when either input is
    /// unreadable (a warning is logged). Long spans are cut at the ceiling
    /// as in [`WorkingHours::hours`].
    pub fn days<S, E>(&self, start: &S, end: &E) -> u32
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        match self.lenient_span(start, end) {
            Some((start, end)) => count_days(start, end),
            None => 0,
        }
    }

    /// Counts day steps from `start` that stay before `end` and land on
    /// Monday to Friday. The workday window and cap do not apply.
    pub fn try_days<S, E>(&self, start: &S, end: &E) -> Result<u32, WorkingHoursError>
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        let (start, end) = self.strict_span(start, end)?;
        Ok(count_days(start, end))
    }

    /// Display label for `hours` under this calculator's config.
    pub fn format(&self, hours: f64, show_days: bool) -> String {
        formatter::format_working_hours(hours, show_days, Some(&self.config))
    }

    fn strict_span<S, E>(&self, start: &S, end: &E) -> Result<(NaiveDateTime, NaiveDateTime), WorkingHoursError>
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        let zone = self.config.time_zone;
        let start = start.to_time_point(&zone)?;
        let end = end.to_time_point(&zone)?;
        check_span(start, end)?;
        Ok((start, end))
    }

    fn lenient_span<S, E>(&self, start: &S, end: &E) -> Option<(NaiveDateTime, NaiveDateTime)>
    where
        S: ToTimePoint + ?Sized,
        E: ToTimePoint + ?Sized,
    {
        let zone = self.config.time_zone;
        let (start, end) = match (start.to_time_point(&zone), end.to_time_point(&zone)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "working time fell back to zero");
                return None;
            }
        };
        if let Err(e) = check_span(start, end) {
            tracing::warn!(error = %e, "span cut at the ceiling");
            return Some((start, end.min(span_ceiling(start))));
        }
        Some((start, end))
    }

    /// Clips each Monday-to-Friday day to the window and applies the cap.
    fn sum_hours(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        if end <= start {
            return 0.0;
        }

        let mut total = 0.0;
        let mut day = start.date();
        let last_day = end.date();
        while day <= last_day {
            if is_business_day(day) {
                let (window_start, window_end) = self.config.window(day);
                let active_start = start.max(window_start);
                let active_end = end.min(window_end);
                if active_start < active_end {
                    let hours = as_hours(active_end - active_start);
                    total += hours.min(self.config.hours_per_work_day);
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        tracing::debug!(%start, %end, hours = total, "working hours computed");
        total
    }
}

/// Working hours between `start` and `end` using `config`, or the default
/// 9-17 window when `None`.
pub fn calculate_working_hours<S, E>(start: &S, end: &E, config: Option<&WorkingHoursConfig>) -> f64
where
    S: ToTimePoint + ?Sized,
    E: ToTimePoint + ?Sized,
{
    WorkingHours::new(config.copied().unwrap_or_default()).hours(start, end)
}

/// Weekdays between `start` and `end` in the local zone.
pub fn calculate_working_days<S, E>(start: &S, end: &E) -> u32
where
    S: ToTimePoint + ?Sized,
    E: ToTimePoint + ?Sized,
{
    WorkingHours::default().days(start, end)
}

/// Monday to Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn hour_of_day(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn as_hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 3_600_000.0
}

fn count_days(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let mut count = 0;
    let mut cursor = start;
    while cursor < end {
        if is_business_day(cursor.date()) {
            count += 1;
        }
        cursor = match cursor.checked_add_signed(Duration::days(1)) {
            Some(next) => next,
            None => break,
        };
    }
    count
}

/// Midnight after the last calendar day a span from `start` may reach.
fn span_ceiling(start: NaiveDateTime) -> NaiveDateTime {
    start
        .date()
        .checked_add_signed(Duration::days(MAX_SPAN_DAYS + 1))
        .map(|date| date.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX)
}

fn check_span(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), WorkingHoursError> {
    let days = (end.date() - start.date()).num_days();
    if days > MAX_SPAN_DAYS {
        return Err(WorkingHoursError::SpanTooLong {
            days,
            limit: MAX_SPAN_DAYS,
        });
    }
    Ok(())
}
