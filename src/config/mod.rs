//! Configuration loading for the attendance engine.
//!
//! Schedule thresholds, report language, sheet column names and output
//! options come from a single YAML file. Every value has a default, so an
//! empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Friday exit: {}", config.schedule.friday_exit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnNames, OutputConfig, ReportConfig, SourceConfig};
