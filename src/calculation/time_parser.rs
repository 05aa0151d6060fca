//! Clock-time parsing for attendance fields.
//!
//! A field that does not match `HH:MM:SS` is treated as "no record" rather
//! than an error. [`classify_clock_field`] keeps the distinction between a
//! blank cell and a malformed one for callers that want to report it;
//! [`parse_clock_time`] collapses both into `None`.

use chrono::NaiveTime;

use crate::models::{CLOCK_TIME_FORMAT, ClockTime};

/// What a raw clock field contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockField {
    /// Empty or whitespace only.
    Blank,
    /// Non-empty content that is not a `HH:MM:SS` time.
    Malformed(String),
    /// A valid time of day.
    Time(ClockTime),
}

impl ClockField {
    /// Returns the parsed time, if any.
    pub fn time(&self) -> Option<ClockTime> {
        match self {
            ClockField::Time(time) => Some(*time),
            ClockField::Blank | ClockField::Malformed(_) => None,
        }
    }
}

/// Classifies a raw clock field.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{ClockField, classify_clock_field};
///
/// assert_eq!(classify_clock_field("  "), ClockField::Blank);
/// assert!(matches!(classify_clock_field("late"), ClockField::Malformed(_)));
/// assert!(matches!(classify_clock_field("08:10:00"), ClockField::Time(_)));
/// ```
pub fn classify_clock_field(raw: &str) -> ClockField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ClockField::Blank;
    }
    match NaiveTime::parse_from_str(trimmed, CLOCK_TIME_FORMAT) {
        Ok(time) => ClockField::Time(ClockTime::from(time)),
        Err(_) => ClockField::Malformed(trimmed.to_string()),
    }
}

/// Parses a clock field, returning `None` when there is no usable time.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_clock_time;
/// use attendance_engine::models::ClockTime;
///
/// assert_eq!(parse_clock_time("17:05:00"), ClockTime::from_hms(17, 5, 0));
/// assert_eq!(parse_clock_time("17:05"), None);
/// assert_eq!(parse_clock_time(""), None);
/// ```
pub fn parse_clock_time(raw: &str) -> Option<ClockTime> {
    classify_clock_field(raw).time()
}

/// Parses an optional field, as delivered by sources with nullable cells.
pub fn parse_optional_clock_time(raw: Option<&str>) -> Option<ClockTime> {
    raw.and_then(parse_clock_time)
}
