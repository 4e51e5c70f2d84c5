//! # Workhours
//!
//! Business-hours arithmetic for KPI dashboards: how many working hours
//! passed between a ticket being opened and closed, skipping weekends and
//! time outside the workday window.
//!
//! ## Features
//!
//! - **Calculator**: working hours and working days between two timestamps
//! - **Formatting**: `"12.5 hrs"` and `"1d 4h"` labels for KPI cards
//! - **Cycle-time reports**: per-ticket durations, average, median and SLA on-time share
//! - **Data Export**: CSV, JSON and Excel
//! - **Configuration**: persisted workday window, daily cap and time zone
//!
//! ## Usage
//!
//! ```rust
//! use workhours::libs::working_hours::{calculate_working_days, calculate_working_hours, format_working_hours};
//!
//! let hours = calculate_working_hours("2024-01-05T16:00:00", "2024-01-08T10:00:00", None);
//! assert_eq!(hours, 2.0);
//! assert_eq!(format_working_hours(hours, false, None), "2.0 hrs");
//! assert_eq!(calculate_working_days("2024-01-08T09:00:00", "2024-01-12T17:00:00"), 5);
//! ```

pub mod commands;
pub mod libs;
