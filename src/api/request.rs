//! Request types for the attendance report API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_optional_clock_time;
use crate::models::{AttendanceDay, Worker};

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The worker the days belong to.
    pub worker: Worker,
    /// Attendance days in display order.
    pub days: Vec<DayRequest>,
    /// Language tag for labels; the configured language when omitted.
    #[serde(default)]
    pub language: Option<String>,
}

/// One day in a report request.
///
/// Clock fields are raw strings; anything that is not `HH:MM:SS` counts as
/// no record, exactly as for sheet cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// The calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(default)]
    pub entry: Option<String>,
    /// Clock-out time.
    #[serde(default)]
    pub exit: Option<String>,
}

impl From<DayRequest> for AttendanceDay {
    fn from(req: DayRequest) -> Self {
        AttendanceDay::new(
            req.date,
            parse_optional_clock_time(req.entry.as_deref()),
            parse_optional_clock_time(req.exit.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "worker": {"name": "Ana Rojas", "id": "1-9"},
            "days": [
                {"date": "2025-03-03", "entry": "08:16:00", "exit": "17:00:00"},
                {"date": "2025-03-04"}
            ]
        }"#;
        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.worker.name, "Ana Rojas");
        assert_eq!(request.days.len(), 2);
        assert!(request.language.is_none());
        assert!(request.days[1].entry.is_none());
    }

    #[test]
    fn test_day_conversion_parses_times_leniently() {
        let day: AttendanceDay = DayRequest {
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            entry: Some("08:10:00".to_string()),
            exit: Some("5pm".to_string()),
        }
        .into();
        assert_eq!(day.entry, ClockTime::from_hms(8, 10, 0));
        assert_eq!(day.exit, None);
    }
}
