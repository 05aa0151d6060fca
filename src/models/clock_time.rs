//! Time-of-day values read from attendance logs.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Format used to read and print clock times.
pub const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";

/// A wall-clock time of day with second precision and no date component.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockTime;
///
/// let entry = ClockTime::from_hms(8, 16, 0).unwrap();
/// let threshold = ClockTime::from_hms(8, 0, 0).unwrap();
/// assert_eq!(threshold.whole_minutes_until(entry), 16);
/// assert_eq!(entry.to_string(), "08:16:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a clock time, returning `None` for out-of-range components.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Const constructor for fixed policy times. Panics at compile time on
    /// out-of-range components.
    pub const fn at(hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => Self(time),
            None => panic!("clock time out of range"),
        }
    }

    /// Returns the underlying chrono time.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Whole minutes from `self` to a later time, floored.
    ///
    /// Returns zero when `later` is not after `self`.
    pub fn whole_minutes_until(&self, later: ClockTime) -> u32 {
        if later <= *self {
            return 0;
        }
        let seconds = (later.0 - self.0).num_seconds();
        (seconds / 60) as u32
    }

    /// Returns this time moved forward by `minutes`, wrapping at midnight.
    pub fn shifted_by_minutes(&self, minutes: u32) -> ClockTime {
        let (shifted, _) = self
            .0
            .overflowing_add_signed(Duration::minutes(i64::from(minutes)));
        ClockTime(shifted)
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // Leap-second representations are folded back into the second.
        let nanos = time.nanosecond() % 1_000_000_000;
        ClockTime(time.with_nanosecond(nanos).unwrap_or(time))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_TIME_FORMAT))
    }
}

/// Formats a minute count as zero-padded `HH:MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(570), "09:30");
/// assert_eq!(format_hours_minutes(10), "00:10");
/// ```
pub fn format_hours_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
