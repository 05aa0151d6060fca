//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::ReportConfig;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Loads and validates a [`ReportConfig`] from a YAML file.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/report.yaml")?;
/// println!("Reports in: {}", config.language);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds
    /// values the engine cannot use.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ReportConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, language = %config.language, "Configuration loaded");
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    pub fn parse(content: &str) -> EngineResult<ReportConfig> {
        // An empty document deserializes to unit, not to an empty mapping.
        let config: ReportConfig = if content.trim().is_empty() {
            ReportConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &ReportConfig) -> EngineResult<()> {
        let schedule = &config.schedule;
        if schedule.grace_threshold < schedule.entry_threshold {
            return Err(EngineError::InvalidConfig {
                field: "schedule.grace_threshold".to_string(),
                message: format!(
                    "{} precedes entry_threshold {}",
                    schedule.grace_threshold, schedule.entry_threshold
                ),
            });
        }

        // Entries inside the grace window push the expected exit by up to
        // this many minutes, and the pushed exit must stay on the same day.
        let max_shift_minutes = schedule
            .entry_threshold
            .whole_minutes_until(schedule.grace_threshold);
        for (field, exit) in [
            ("schedule.weekday_exit", schedule.weekday_exit),
            ("schedule.friday_exit", schedule.friday_exit),
        ] {
            if exit <= schedule.grace_threshold {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{exit} is not after grace_threshold {}", schedule.grace_threshold),
                });
            }
            if exit.seconds_from_midnight() + max_shift_minutes * 60 >= SECONDS_PER_DAY {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!(
                        "{exit} shifted by the {max_shift_minutes} minute grace window passes midnight"
                    ),
                });
            }
        }

        let date_format = &config.source.date_format;
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(EngineError::InvalidConfig {
                field: "source.date_format".to_string(),
                message: format!("'{date_format}' is not a valid date format"),
            });
        }

        // A format that cannot print a date cannot parse one either.
        let probe = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
        let printed = probe.format(date_format).to_string();
        if NaiveDate::parse_from_str(&printed, date_format) != Ok(probe) {
            return Err(EngineError::InvalidConfig {
                field: "source.date_format".to_string(),
                message: format!("'{date_format}' does not describe a full date"),
            });
        }

        let columns = &config.source.columns;
        for (field, name) in [
            ("source.columns.name", &columns.name),
            ("source.columns.id", &columns.id),
            ("source.columns.date", &columns.date),
            ("source.columns.entry", &columns.entry),
            ("source.columns.exit", &columns.exit),
        ] {
            if name.trim().is_empty() {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: "column name is empty".to_string(),
                });
            }
        }

        if !config.source.delimiter.is_ascii() {
            return Err(EngineError::InvalidConfig {
                field: "source.delimiter".to_string(),
                message: "delimiter must be a single ASCII character".to_string(),
            });
        }

        Ok(())
    }
}
