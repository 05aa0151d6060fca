//! Application state for the attendance report API.

use std::sync::Arc;

use crate::config::ReportConfig;

/// Shared application state.
///
/// Holds the report configuration shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ReportConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}
