//! Attendance interpretation logic.
//!
//! Clock-time parsing, the weekday schedule policy, per-day evaluation of
//! lateness, early departure, overtime and duration, and the fold that turns
//! evaluated days into report rows and totals.

mod record_evaluator;
mod report_aggregator;
mod schedule_policy;
mod time_parser;

pub use record_evaluator::evaluate_day;
pub use report_aggregator::{
    AggregatedReport, REPORT_DATE_FORMAT, ReportAggregator, aggregate_days, format_row,
};
pub use schedule_policy::{
    DEFAULT_ENTRY_THRESHOLD, DEFAULT_FRIDAY_EXIT, DEFAULT_GRACE_THRESHOLD, DEFAULT_WEEKDAY_EXIT,
    Schedule, SchedulePolicy,
};
pub use time_parser::{ClockField, classify_clock_field, parse_clock_time, parse_optional_clock_time};
