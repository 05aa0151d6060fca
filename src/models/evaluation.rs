//! Per-day evaluation results and their audit steps.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// Classification of a single attendance day.
///
/// `NoData` is the default when no lateness or early-departure rule fired.
/// It is shown for on-time arrivals as well as days without an entry, and
/// means "nothing to flag", not "compliant".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum DayStatus {
    /// No rule fired.
    NoData,
    /// Arrived after the grace threshold; minutes past the entry threshold.
    Late(u32),
    /// Arrived inside the grace window and left before the shifted exit.
    EarlyDeparture(u32),
}

impl DayStatus {
    /// Minutes this status adds to the total delay.
    ///
    /// ```
    /// use attendance_engine::models::DayStatus;
    ///
    /// assert_eq!(DayStatus::Late(16).delay_minutes(), 16);
    /// assert_eq!(DayStatus::NoData.delay_minutes(), 0);
    /// ```
    pub fn delay_minutes(&self) -> u32 {
        match self {
            DayStatus::NoData => 0,
            DayStatus::Late(minutes) | DayStatus::EarlyDeparture(minutes) => *minutes,
        }
    }
}

/// A single rule application recorded while evaluating a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number within the day.
    pub step_number: u32,
    /// Stable identifier of the rule.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The values the rule looked at.
    pub input: serde_json::Value,
    /// The values the rule produced.
    pub output: serde_json::Value,
    /// Explanation of the decision.
    pub reasoning: String,
}

/// The outcome of evaluating one [`AttendanceDay`](super::AttendanceDay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Status flag for the day.
    pub status: DayStatus,
    /// Exit time overtime and early departure are measured against.
    pub expected_exit: ClockTime,
    /// Whole minutes worked after the expected exit.
    pub overtime_minutes: u32,
    /// Whole minutes between entry and exit, `None` when not calculable.
    pub duration_minutes: Option<u32>,
    /// Rules that fired, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl EvaluationResult {
    /// Minutes this day contributes to the total delay.
    pub fn delay_contribution(&self) -> u32 {
        self.status.delay_minutes()
    }
}
