//! Per-day attendance evaluation.
//!
//! Turns one day's entry/exit pair into a [`DayStatus`], the expected exit
//! time, overtime and worked duration. Rules, in order:
//!
//! 1. No entry: nothing is flagged and the baseline exit applies.
//! 2. Entry at or before the entry threshold: nothing is flagged.
//! 3. Entry after the entry threshold: lateness is the floored minutes past
//!    the threshold.
//!    - After the grace threshold the day is `Late(lateness)`.
//!    - Inside the grace window the expected exit moves forward by the
//!      lateness, and leaving before it is `EarlyDeparture(minutes)`.
//! 4. Overtime is time past the expected exit.
//! 5. Duration is exit minus entry when both exist.
//!
//! All minute values are floored to whole minutes.

use crate::models::{AttendanceDay, AuditStep, ClockTime, DayStatus, EvaluationResult};

use super::Schedule;

/// Collects audit steps with sequential numbering.
struct AuditLog {
    steps: Vec<AuditStep>,
}

impl AuditLog {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }
}

/// Evaluates one attendance day against its schedule.
///
/// Never fails: absent clock times degrade to "no data" and "not
/// calculable" outcomes. Rules apply in this order:
/// - **Lateness:** entry after the grace threshold counts every minute past
///   the entry threshold.
/// - **Grace shift:** entry inside the grace window pushes the expected exit
///   by the same number of minutes, and only then is an earlier exit an
///   early departure.
/// - **Overtime:** exit minutes past the expected exit.
/// - **Duration:** entry to exit, when both exist and exit is not earlier.
///
/// All minute counts are floored.
///
/// # Arguments
///
/// * `day` - The date and the optional clock-in/clock-out times
/// * `schedule` - Thresholds and baseline exit for the day's weekday
///
/// # Returns
///
/// An [`EvaluationResult`] containing:
/// - `status`: no data, late or early departure, with minutes
/// - `expected_exit`: the baseline exit, shifted when the grace rule applied
/// - `overtime_minutes` and `duration_minutes`
/// - `audit_steps`: one step per rule that fired, in order
///
/// # Examples
///
/// ## Late arrival
///
/// ```
/// use attendance_engine::calculation::{SchedulePolicy, evaluate_day};
/// use attendance_engine::models::{AttendanceDay, ClockTime, DayStatus};
/// use chrono::NaiveDate;
///
/// let day = AttendanceDay::new(
///     NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(), // Tuesday
///     ClockTime::from_hms(8, 16, 0),
///     ClockTime::from_hms(17, 0, 0),
/// );
/// let schedule = SchedulePolicy::default().schedule_for(day.weekday());
/// let result = evaluate_day(&day, &schedule);
///
/// assert_eq!(result.status, DayStatus::Late(16));
/// assert_eq!(result.expected_exit, ClockTime::at(17, 0));
/// ```
///
/// ## Grace window with early departure
///
/// ```
/// use attendance_engine::calculation::{SchedulePolicy, evaluate_day};
/// use attendance_engine::models::{AttendanceDay, ClockTime, DayStatus};
/// use chrono::NaiveDate;
///
/// let day = AttendanceDay::new(
///     NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     ClockTime::from_hms(8, 10, 0),
///     ClockTime::from_hms(17, 5, 0),
/// );
/// let schedule = SchedulePolicy::default().schedule_for(day.weekday());
/// let result = evaluate_day(&day, &schedule);
///
/// assert_eq!(result.expected_exit, ClockTime::at(17, 10));
/// assert_eq!(result.status, DayStatus::EarlyDeparture(5));
/// ```
pub fn evaluate_day(day: &AttendanceDay, schedule: &Schedule) -> EvaluationResult {
    let mut audit = AuditLog::new();
    let mut status = DayStatus::NoData;
    let mut expected_exit = schedule.baseline_exit;

    match day.entry {
        None => {
            audit.record(
                "entry_absent",
                "Missing Entry",
                serde_json::json!({ "entry": null }),
                serde_json::json!({ "expected_exit": expected_exit }),
                format!("No entry recorded, expected exit stays at baseline {expected_exit}"),
            );
        }
        Some(entry) if entry <= schedule.entry_threshold => {
            audit.record(
                "entry_on_time",
                "On-Time Entry",
                serde_json::json!({ "entry": entry, "entry_threshold": schedule.entry_threshold }),
                serde_json::json!({ "lateness_minutes": 0 }),
                format!(
                    "Entry {entry} is not after threshold {}",
                    schedule.entry_threshold
                ),
            );
        }
        Some(entry) => {
            let lateness = schedule.entry_threshold.whole_minutes_until(entry);

            if entry > schedule.grace_threshold {
                status = DayStatus::Late(lateness);
                audit.record(
                    "lateness",
                    "Late Entry",
                    serde_json::json!({
                        "entry": entry,
                        "entry_threshold": schedule.entry_threshold,
                        "grace_threshold": schedule.grace_threshold
                    }),
                    serde_json::json!({ "lateness_minutes": lateness }),
                    format!(
                        "Entry {entry} is after grace threshold {}, {lateness} minutes late",
                        schedule.grace_threshold
                    ),
                );
            } else {
                expected_exit = schedule.baseline_exit.shifted_by_minutes(lateness);
                audit.record(
                    "grace_shift",
                    "Grace Window Exit Shift",
                    serde_json::json!({
                        "entry": entry,
                        "baseline_exit": schedule.baseline_exit
                    }),
                    serde_json::json!({ "expected_exit": expected_exit }),
                    format!(
                        "Entry {entry} is within the grace window, exit shifted by {lateness} minutes"
                    ),
                );

                if let Some(exit) = day.exit.filter(|exit| *exit < expected_exit) {
                    let early = exit.whole_minutes_until(expected_exit);
                    status = DayStatus::EarlyDeparture(early);
                    audit.record(
                        "early_departure",
                        "Early Departure",
                        serde_json::json!({ "exit": exit, "expected_exit": expected_exit }),
                        serde_json::json!({ "early_minutes": early }),
                        format!("Exit {exit} is {early} minutes before expected {expected_exit}"),
                    );
                }
            }
        }
    }

    let overtime_minutes = overtime_minutes(day.exit, expected_exit);
    if overtime_minutes > 0 {
        audit.record(
            "overtime",
            "Overtime",
            serde_json::json!({ "exit": day.exit, "expected_exit": expected_exit }),
            serde_json::json!({ "overtime_minutes": overtime_minutes }),
            format!("Worked {overtime_minutes} minutes past expected exit {expected_exit}"),
        );
    }

    let duration_minutes = duration_minutes(day.entry, day.exit);
    audit.record(
        "duration",
        "Worked Duration",
        serde_json::json!({ "entry": day.entry, "exit": day.exit }),
        serde_json::json!({ "duration_minutes": duration_minutes }),
        match duration_minutes {
            Some(minutes) => format!("Worked {minutes} minutes between entry and exit"),
            None => "Duration not calculable without both entry and exit".to_string(),
        },
    );

    EvaluationResult {
        status,
        expected_exit,
        overtime_minutes,
        duration_minutes,
        audit_steps: audit.steps,
    }
}

/// Whole minutes worked after `expected_exit`, zero without an exit.
fn overtime_minutes(exit: Option<ClockTime>, expected_exit: ClockTime) -> u32 {
    match exit {
        Some(exit) if exit > expected_exit => expected_exit.whole_minutes_until(exit),
        _ => 0,
    }
}

/// Whole minutes between entry and exit.
///
/// `None` when either is missing or the exit precedes the entry.
fn duration_minutes(entry: Option<ClockTime>, exit: Option<ClockTime>) -> Option<u32> {
    match (entry, exit) {
        (Some(entry), Some(exit)) if exit >= entry => Some(entry.whole_minutes_until(exit)),
        _ => None,
    }
}
