//! Display formatting for working-hour figures.
//!
//! KPI cards and reports show working time in one of two shapes:
//!
//! - **Hour labels**: `"12.5 hrs"`, one fractional digit, or `"0 hrs"` for zero
//! - **Day labels**: `"1d 4h"` / `"5d"`, whole workdays plus the remainder
//!   rounded to whole hours, used when `show_days` is set and the figure
//!   reaches at least one workday
//!
//! Exports additionally carry a clock form (`"37:30"`) via [`format_hours_clock`].
//!
//! None of these functions clamp their input. A negative figure is rendered
//! as-is; keeping values sane is the caller's job.
//!
//! ## Examples
//!
//! ```rust
//! use workhours::libs::formatter::{format_hours_clock, format_working_hours};
//!
//! assert_eq!(format_working_hours(0.0, false, None), "0 hrs");
//! assert_eq!(format_working_hours(12.5, false, None), "12.5 hrs");
//! assert_eq!(format_working_hours(40.0, true, None), "5d");
//! assert_eq!(format_working_hours(12.0, true, None), "1d 4h");
//! assert_eq!(format_hours_clock(37.5), "37:30");
//! ```

use super::working_hours::WorkingHoursConfig;

pub const ZERO_HOURS_LABEL: &str = "0 hrs";

const MAX_EXACT_DAYS: f64 = 9_007_199_254_740_992.0;

/// Formats `hours` as an hour label, or as a day label when `show_days` is
/// set and `hours` covers at least one workday of `config` (default 8 hours).
///
/// Accepts any `f64`. Non-finite values and figures too large for an exact
/// day count always get the hour label (`"inf hrs"`, `"NaN hrs"`).
pub fn format_working_hours(hours: f64, show_days: bool, config: Option<&WorkingHoursConfig>) -> String {
    if hours == 0.0 {
        return ZERO_HOURS_LABEL.to_string();
    }

    let per_day = config.copied().unwrap_or_default().hours_per_work_day();
    let whole_days = (hours / per_day).floor();
    // Past 2^53 days (or for inf/NaN) there is no exact day count to show.
    if show_days && hours >= per_day && whole_days < MAX_EXACT_DAYS {
        let mut days = whole_days as i64;
        let mut remainder = (hours - whole_days * per_day).round().max(0.0);
        // A remainder that rounds up to a full workday is a day, not "8h".
        if remainder >= per_day {
            days = days.saturating_add(1);
            remainder = 0.0;
        }
        return if remainder == 0.0 {
            format!("{}d", days)
        } else {
            format!("{}d {}h", days, remainder as i64)
        };
    }

    format!("{:.1} hrs", hours)
}

/// Formats `hours` as `"HH:MM"`, rounded to the nearest minute.
///
/// Negative input keeps its sign (`"-01:30"`). Out-of-range values saturate.
pub fn format_hours_clock(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}
