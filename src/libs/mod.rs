//! Core library modules for the workhours application.
//!
//! ## Layout
//!
//! - **Calculator**: [`working_hours`], [`timestamp`], [`formatter`], [`error`]
//! - **Reporting**: [`tickets`], [`cycle_time`], [`export`], [`view`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use workhours::libs::working_hours::{WorkingHours, WorkingHoursConfig};
//!
//! let config = WorkingHoursConfig::new(8, 16, 8.0)?;
//! let calculator = WorkingHours::new(config);
//! assert_eq!(calculator.hours("2024-01-08T07:00:00", "2024-01-08T12:00:00"), 4.0);
//! # Ok::<(), workhours::libs::error::ConfigError>(())
//! ```

pub mod config;
pub mod cycle_time;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod tickets;
pub mod timestamp;
pub mod view;
pub mod working_hours;
