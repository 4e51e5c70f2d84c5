//! Persisted configuration for the workhours CLI.
//!
//! Settings live in `config.json` inside the platform data directory
//! (see [`DataStorage`]). Two modules can be configured:
//!
//! - **Workday**: window hours, per-day cap and time zone used by the calculator
//! - **Report**: SLA threshold and duration style for cycle-time reports
//!
//! A missing file is not an error; every command then runs on defaults
//! (9-17, 8 hours per day, local zone). A file with an invalid workday, such
//! as an end hour before the start hour, is rejected when read.
//!
//! ```rust,no_run
//! use workhours::libs::config::Config;
//!
//! let config = Config::read()?;
//! let calculator = workhours::libs::working_hours::WorkingHours::new(config.working_hours());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::timestamp::TimeZoneSetting;
use super::working_hours::WorkingHoursConfig;
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A module offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Cycle-time report defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ReportConfig {
    /// Working hours within which a ticket counts as on time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_hours: Option<f64>,

    /// Render durations as `"1d 4h"` instead of `"12.0 hrs"`.
    #[serde(default)]
    pub show_days: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workday: Option<WorkingHoursConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        msg_debug!(format!("Reading configuration from {}", config_file_path.display()));
        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved configuration. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        Self::delete_from(&DataStorage::new())
    }

    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Workday settings, falling back to the 9-17 default.
    pub fn working_hours(&self) -> WorkingHoursConfig {
        self.workday.unwrap_or_default()
    }

    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "workday".to_string(),
                name: "Workday".to_string(),
            },
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "workday" => {
                    msg_print!(Message::ConfigModuleWorkday);
                    config.workday = Some(Self::init_workday(&config.working_hours())?);
                }
                "report" => {
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(Self::init_report(&config.report())?);
                }
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_workday(default: &WorkingHoursConfig) -> Result<WorkingHoursConfig> {
        let theme = ColorfulTheme::default();
        let start_hour: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkDayStartHour.to_string())
            .default(default.work_day_start_hour())
            .interact_text()?;
        let end_hour: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkDayEndHour.to_string())
            .default(default.work_day_end_hour())
            .interact_text()?;
        let hours_per_day: f64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptHoursPerWorkDay.to_string())
            .default(default.hours_per_work_day())
            .interact_text()?;
        let time_zone: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTimeZone.to_string())
            .default(default.time_zone().to_string())
            .validate_with(|input: &String| input.parse::<TimeZoneSetting>().map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let time_zone: TimeZoneSetting = time_zone.parse()?;
        let workday = WorkingHoursConfig::new(start_hour, end_hour, hours_per_day)
            .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;
        Ok(workday.with_time_zone(time_zone))
    }

    fn init_report(default: &ReportConfig) -> Result<ReportConfig> {
        let theme = ColorfulTheme::default();
        let sla_hours: f64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptSlaHours.to_string())
            .default(default.sla_hours.unwrap_or(0.0))
            .interact_text()?;
        let show_days = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptShowDays.to_string())
            .default(default.show_days)
            .interact()?;

        Ok(ReportConfig {
            sla_hours: (sla_hours > 0.0).then_some(sla_hours),
            show_days,
        })
    }
}
