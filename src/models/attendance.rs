//! Worker and per-day attendance records.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// The person an attendance sheet belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Display name as written in the sheet.
    pub name: String,
    /// Identifier (national id or payroll number).
    pub id: String,
}

/// One day of clock-in/clock-out data for a worker.
///
/// Only rows with a resolvable calendar date become an `AttendanceDay`;
/// missing or malformed clock fields are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// First clock-in of the day.
    pub entry: Option<ClockTime>,
    /// Last clock-out of the day.
    pub exit: Option<ClockTime>,
}

impl AttendanceDay {
    /// Creates a new attendance day.
    pub fn new(date: NaiveDate, entry: Option<ClockTime>, exit: Option<ClockTime>) -> Self {
        Self { date, entry, exit }
    }

    /// Returns the day of the week of the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceDay;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let day = AttendanceDay::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(), None, None);
    /// assert_eq!(day.weekday(), Weekday::Fri);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
