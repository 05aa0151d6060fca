//! Folding evaluated days into report rows and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceDay, ClockTime, DayStatus, EvaluationResult, ReportRow, ReportSummary,
    format_hours_minutes,
};
use crate::report::Language;

use super::{SchedulePolicy, evaluate_day};

/// Date format used in report rows.
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Rows and totals for one worker's sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedReport {
    /// One row per day, in input order.
    pub rows: Vec<ReportRow>,
    /// Totals over all rows.
    pub summary: ReportSummary,
}

/// Accumulates evaluated days in the order they are supplied.
///
/// Rows are never reordered or deduplicated. The summary is only handed out
/// by [`finish`](Self::finish), after which the aggregator is consumed.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{ReportAggregator, SchedulePolicy, evaluate_day};
/// use attendance_engine::models::{AttendanceDay, ClockTime};
/// use attendance_engine::report::Language;
/// use chrono::NaiveDate;
///
/// let policy = SchedulePolicy::default();
/// let mut aggregator = ReportAggregator::new(Language::Spanish);
/// let day = AttendanceDay::new(
///     NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     ClockTime::from_hms(8, 20, 0),
///     ClockTime::from_hms(17, 0, 0),
/// );
/// let result = evaluate_day(&day, &policy.schedule_for(day.weekday()));
/// aggregator.push(&day, &result);
///
/// let report = aggregator.finish();
/// assert_eq!(report.summary.total_delay_minutes, 20);
/// assert_eq!(report.rows[0].status, "20 min (E/T)");
/// ```
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    language: Language,
    rows: Vec<ReportRow>,
    summary: ReportSummary,
    worked_minutes: u64,
    overtime_minutes: u64,
}

impl ReportAggregator {
    /// Creates an empty aggregator producing rows in `language`.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rows: Vec::new(),
            summary: ReportSummary::default(),
            worked_minutes: 0,
            overtime_minutes: 0,
        }
    }

    /// Adds one evaluated day.
    pub fn push(&mut self, day: &AttendanceDay, result: &EvaluationResult) {
        let previous_total = self.summary.total_delay_minutes;
        self.summary.total_delay_minutes += result.delay_contribution();
        debug_assert!(self.summary.total_delay_minutes >= previous_total);

        self.summary.days_evaluated += 1;
        match result.status {
            DayStatus::Late(_) => self.summary.late_days += 1,
            DayStatus::EarlyDeparture(_) => self.summary.early_departure_days += 1,
            DayStatus::NoData => {}
        }
        if day.entry.is_none() {
            self.summary.days_without_entry += 1;
        }

        self.worked_minutes += u64::from(result.duration_minutes.unwrap_or(0));
        self.overtime_minutes += u64::from(result.overtime_minutes);

        self.rows.push(format_row(day, result, self.language));
    }

    /// Finalizes the summary and returns rows and totals.
    pub fn finish(mut self) -> AggregatedReport {
        self.summary.worked_hours = minutes_to_hours(self.worked_minutes);
        self.summary.overtime_hours = minutes_to_hours(self.overtime_minutes);
        AggregatedReport {
            rows: self.rows,
            summary: self.summary,
        }
    }
}

/// Evaluates every day with `policy` and folds the results.
///
/// # Arguments
///
/// * `days` - Attendance days in display order; they are not re-sorted
/// * `policy` - Schedule policy resolving each day's weekday schedule
/// * `language` - Language for weekday names and status labels
///
/// # Returns
///
/// An [`AggregatedReport`] containing:
/// - `rows`: one formatted row per day, in input order
/// - `summary`: total delay minutes, day counts and hour totals
pub fn aggregate_days(
    days: &[AttendanceDay],
    policy: &SchedulePolicy,
    language: Language,
) -> AggregatedReport {
    let mut aggregator = ReportAggregator::new(language);
    for day in days {
        let result = evaluate_day(day, &policy.schedule_for(day.weekday()));
        aggregator.push(day, &result);
    }
    aggregator.finish()
}

/// Renders one day and its evaluation as display strings.
///
/// Absent clock times show the language's "no record" text and an absent
/// duration shows "not calculable".
pub fn format_row(day: &AttendanceDay, result: &EvaluationResult, language: Language) -> ReportRow {
    let clock = |time: Option<ClockTime>| match time {
        Some(time) => time.to_string(),
        None => language.no_record().to_string(),
    };

    ReportRow {
        date: day.date.format(REPORT_DATE_FORMAT).to_string(),
        weekday: language.weekday_name(day.weekday()).to_string(),
        entry: clock(day.entry),
        exit: clock(day.exit),
        duration: match result.duration_minutes {
            Some(minutes) => format_hours_minutes(minutes),
            None => language.not_calculable().to_string(),
        },
        overtime: format_hours_minutes(result.overtime_minutes),
        status: language.status_label(&result.status),
    }
}

fn minutes_to_hours(minutes: u64) -> Decimal {
    (Decimal::from(minutes) / Decimal::new(60, 0)).round_dp(2)
}
