//! Working-day schedule policy.
//!
//! Entry and grace thresholds are shared by every weekday; only the baseline
//! exit differs, with Friday finishing an hour earlier.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::ClockTime;

/// Arrivals after this time accrue lateness minutes.
pub const DEFAULT_ENTRY_THRESHOLD: ClockTime = ClockTime::at(8, 0);

/// Arrivals after this time are flagged as late.
pub const DEFAULT_GRACE_THRESHOLD: ClockTime = ClockTime::at(8, 15);

/// Baseline exit Monday to Thursday and on weekends.
pub const DEFAULT_WEEKDAY_EXIT: ClockTime = ClockTime::at(17, 0);

/// Baseline exit on Fridays.
pub const DEFAULT_FRIDAY_EXIT: ClockTime = ClockTime::at(16, 0);

/// The thresholds that apply to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Latest entry without lateness.
    pub entry_threshold: ClockTime,
    /// Latest entry that shifts the exit instead of counting as late.
    pub grace_threshold: ClockTime,
    /// Exit time before any grace shift.
    pub baseline_exit: ClockTime,
}

/// Maps weekdays to [`Schedule`]s.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::SchedulePolicy;
/// use attendance_engine::models::ClockTime;
/// use chrono::Weekday;
///
/// let policy = SchedulePolicy::default();
/// assert_eq!(policy.schedule_for(Weekday::Fri).baseline_exit, ClockTime::at(16, 0));
/// assert_eq!(policy.schedule_for(Weekday::Tue).baseline_exit, ClockTime::at(17, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePolicy {
    /// Latest entry without lateness.
    pub entry_threshold: ClockTime,
    /// End of the grace window.
    pub grace_threshold: ClockTime,
    /// Baseline exit for every day except Friday.
    pub weekday_exit: ClockTime,
    /// Baseline exit on Friday.
    pub friday_exit: ClockTime,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            entry_threshold: DEFAULT_ENTRY_THRESHOLD,
            grace_threshold: DEFAULT_GRACE_THRESHOLD,
            weekday_exit: DEFAULT_WEEKDAY_EXIT,
            friday_exit: DEFAULT_FRIDAY_EXIT,
        }
    }
}

impl SchedulePolicy {
    /// Returns the schedule for a weekday.
    pub fn schedule_for(&self, weekday: Weekday) -> Schedule {
        Schedule {
            entry_threshold: self.entry_threshold,
            grace_threshold: self.grace_threshold,
            baseline_exit: self.baseline_exit(weekday),
        }
    }

    /// Returns the exit time before any grace shift.
    pub fn baseline_exit(&self, weekday: Weekday) -> ClockTime {
        match weekday {
            Weekday::Fri => self.friday_exit,
            _ => self.weekday_exit,
        }
    }
}
