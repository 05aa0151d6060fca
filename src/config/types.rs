//! Configuration types for attendance reports.
//!
//! Every section is optional in YAML; omitted values fall back to the
//! defaults documented on each field.

use serde::Deserialize;

use crate::calculation::SchedulePolicy;
use crate::report::{DEFAULT_OUTPUT_PREFIX, DEFAULT_ROWS_PER_PAGE, Language, OutputFormat};

/// Column names of the attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Worker display name (`Nombre`).
    pub name: String,
    /// Worker identifier (`Rut`).
    pub id: String,
    /// Calendar date (`Fecha`).
    pub date: String,
    /// Clock-in time (`Entrada`).
    pub entry: String,
    /// Clock-out time (`Salida`).
    pub exit: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Nombre".to_string(),
            id: "Rut".to_string(),
            date: "Fecha".to_string(),
            entry: "Entrada".to_string(),
            exit: "Salida".to_string(),
        }
    }
}

/// How attendance sheets are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// chrono format of the date column (`%d-%m-%Y`).
    pub date_format: String,
    /// Trailing rows discarded from every sheet (1).
    pub footer_rows: usize,
    /// Field delimiter (`,`).
    pub delimiter: char,
    /// Column names.
    pub columns: ColumnNames,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            date_format: "%d-%m-%Y".to_string(),
            footer_rows: 1,
            delimiter: ',',
            columns: ColumnNames::default(),
        }
    }
}

/// Where and how reports are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name prefix (`Informe_`).
    pub prefix: String,
    /// Document format (`text`).
    pub format: OutputFormat,
    /// Table rows per text page (25).
    pub rows_per_page: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            format: OutputFormat::default(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// The complete report configuration.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ReportConfig;
/// use attendance_engine::report::Language;
///
/// let config: ReportConfig = serde_yaml::from_str("language: en").unwrap();
/// assert_eq!(config.language, Language::English);
/// assert_eq!(config.source.footer_rows, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report language (`es`).
    pub language: Language,
    /// Entry, grace and exit thresholds.
    pub schedule: SchedulePolicy,
    /// Sheet reading options.
    pub source: SourceConfig,
    /// Output options.
    pub output: OutputConfig,
}
