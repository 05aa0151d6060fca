//! Report models handed to document renderers.
//!
//! A [`ReportRow`] is presentation-ready: every cell is already a string in
//! the report's language. The [`ReportSummary`] keeps numeric totals so that
//! renderers and API clients can format them as they need.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Worker;

/// One table row of an attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Formatted calendar date.
    pub date: String,
    /// Weekday name.
    pub weekday: String,
    /// Entry time or the "no record" label.
    pub entry: String,
    /// Exit time or the "no record" label.
    pub exit: String,
    /// Worked time as `HH:MM` or the "not calculable" label.
    pub duration: String,
    /// Overtime as `HH:MM`.
    pub overtime: String,
    /// Status label.
    pub status: String,
}

/// Totals accumulated while folding a worker's days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportSummary;
///
/// let summary = ReportSummary::default();
/// assert_eq!(summary.total_delay_minutes, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of lateness and early-departure minutes.
    pub total_delay_minutes: u32,
    /// Number of days evaluated.
    pub days_evaluated: usize,
    /// Days flagged as late.
    pub late_days: usize,
    /// Days flagged as early departures.
    pub early_departure_days: usize,
    /// Days without an entry time.
    pub days_without_entry: usize,
    /// Hours worked on days where a duration was calculable.
    pub worked_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
}

/// A complete, renderer-ready attendance report for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Report title.
    pub title: String,
    /// The worker the report belongs to.
    pub worker: Worker,
    /// Column headings, in display order.
    pub columns: Vec<String>,
    /// Table rows in input order.
    pub rows: Vec<ReportRow>,
    /// Totals for the whole sheet.
    pub summary: ReportSummary,
    /// Label printed before the total delay figure.
    pub total_delay_label: String,
    /// Captions for the two signature lines (worker, supervisor).
    pub signature_labels: [String; 2],
}
