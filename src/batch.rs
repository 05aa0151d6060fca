//! Batch processing of attendance sheets.
//!
//! Each file goes through the whole pipeline on its own: read, evaluate,
//! aggregate, assemble, render, write. A failing file is recorded and the
//! batch moves on to the next one.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::aggregate_days;
use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceReport;
use crate::report::{assemble_report, output_path, write_report};
use crate::source::read_sheet;

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// The source file.
    pub file: PathBuf,
    /// Error message shown to the user.
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Files attempted.
    pub attempted: usize,
    /// Files that produced a report.
    pub succeeded: usize,
    /// Reports written, in input order.
    pub outputs: Vec<PathBuf>,
    /// Files that failed, in input order.
    pub failures: Vec<FileFailure>,
    /// Reports written more than once in this run; the last writer wins.
    #[serde(default)]
    pub overwritten: Vec<PathBuf>,
}

impl BatchSummary {
    /// Returns true when every attempted file succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the report pipeline over files with a fixed configuration.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: ReportConfig,
}

impl BatchProcessor {
    /// Creates a processor using `config` for every file.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Reads and evaluates one sheet without writing anything.
    pub fn build_report(&self, path: &Path) -> EngineResult<AttendanceReport> {
        let sheet = read_sheet(path, &self.config.source)?;
        let aggregated = aggregate_days(&sheet.days, &self.config.schedule, self.config.language);
        info!(
            file = %path.display(),
            worker_id = %sheet.worker.id,
            days = sheet.days.len(),
            skipped_rows = sheet.skipped_rows,
            total_delay_minutes = aggregated.summary.total_delay_minutes,
            "Attendance sheet evaluated"
        );
        Ok(assemble_report(sheet.worker, aggregated, self.config.language))
    }

    /// Processes one file and returns the path of the written report.
    ///
    /// Errors are tagged with the file name.
    pub fn process_file(&self, path: &Path) -> EngineResult<PathBuf> {
        self.process_file_inner(path)
            .map_err(|err| err.for_file(file_label(path)))
    }

    fn process_file_inner(&self, path: &Path) -> EngineResult<PathBuf> {
        let report = self.build_report(path)?;
        let output = &self.config.output;
        let renderer = output
            .format
            .renderer(self.config.language, output.rows_per_page);
        let destination = output_path(
            path,
            &output.prefix,
            &report.worker.name,
            renderer.extension(),
        );
        write_report(renderer.as_ref(), &report, &destination)?;
        Ok(destination)
    }

    /// Processes every file in order, isolating failures per file.
    pub fn run<I, P>(&self, paths: I) -> BatchSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let mut summary = BatchSummary::default();

        for path in paths {
            let path = path.as_ref();
            summary.attempted += 1;
            match self.process_file(path) {
                Ok(destination) => {
                    if summary.outputs.contains(&destination) {
                        warn!(
                            file = %path.display(),
                            output = %destination.display(),
                            "Report overwrites one written earlier in this batch"
                        );
                        summary.overwritten.push(destination.clone());
                    }
                    info!(
                        file = %path.display(),
                        output = %destination.display(),
                        "Report generated"
                    );
                    summary.succeeded += 1;
                    summary.outputs.push(destination);
                }
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "File processing failed");
                    summary.failures.push(FileFailure {
                        file: path.to_path_buf(),
                        message: failure_message(&err),
                    });
                }
            }
        }

        info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Batch completed"
        );
        summary
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The message shown for a failed file: the underlying error, since the file
/// is reported alongside it.
fn failure_message(err: &EngineError) -> String {
    match err {
        EngineError::FileFailed { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
