//! Core data models for the attendance engine.

mod attendance;
mod clock_time;
mod evaluation;
mod report;

pub use attendance::{AttendanceDay, Worker};
pub use clock_time::{CLOCK_TIME_FORMAT, ClockTime, format_hours_minutes};
pub use evaluation::{AuditStep, DayStatus, EvaluationResult};
pub use report::{AttendanceReport, ReportRow, ReportSummary};
