//! Language-tagged label tables for reports.
//!
//! Weekday names and status wording are plain lookups keyed by [`Language`];
//! nothing here depends on the process locale.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::DayStatus;

/// Report language.
///
/// Parsed from a BCP-47 style tag; only the primary subtag is used.
///
/// # Example
///
/// ```
/// use attendance_engine::report::Language;
/// use chrono::Weekday;
///
/// let language: Language = "es-CL".parse().unwrap();
/// assert_eq!(language, Language::Spanish);
/// assert_eq!(language.weekday_name(Weekday::Wed), "Miércoles");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Spanish (`es`), the wording used on printed reports.
    #[default]
    #[serde(rename = "es")]
    Spanish,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Returns the primary language subtag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Capitalised weekday name.
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self {
            Language::Spanish => match weekday {
                Weekday::Mon => "Lunes",
                Weekday::Tue => "Martes",
                Weekday::Wed => "Miércoles",
                Weekday::Thu => "Jueves",
                Weekday::Fri => "Viernes",
                Weekday::Sat => "Sábado",
                Weekday::Sun => "Domingo",
            },
            Language::English => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }

    /// Shown in place of a missing entry or exit time.
    pub fn no_record(&self) -> &'static str {
        match self {
            Language::Spanish => "Sin registro",
            Language::English => "No record",
        }
    }

    /// Shown when the worked duration cannot be computed.
    pub fn not_calculable(&self) -> &'static str {
        match self {
            Language::Spanish => "No calculable",
            Language::English => "Not calculable",
        }
    }

    /// Status cell text.
    ///
    /// ```
    /// use attendance_engine::models::DayStatus;
    /// use attendance_engine::report::Language;
    ///
    /// assert_eq!(Language::Spanish.status_label(&DayStatus::Late(16)), "16 min (E/T)");
    /// assert_eq!(Language::Spanish.status_label(&DayStatus::EarlyDeparture(5)), "5 min (N/R)");
    /// assert_eq!(Language::Spanish.status_label(&DayStatus::NoData), "S/D");
    /// ```
    pub fn status_label(&self, status: &DayStatus) -> String {
        match (self, status) {
            (Language::Spanish, DayStatus::NoData) => "S/D".to_string(),
            (Language::Spanish, DayStatus::Late(minutes)) => format!("{minutes} min (E/T)"),
            (Language::Spanish, DayStatus::EarlyDeparture(minutes)) => {
                format!("{minutes} min (N/R)")
            }
            (Language::English, DayStatus::NoData) => "N/D".to_string(),
            (Language::English, DayStatus::Late(minutes)) => format!("{minutes} min (late)"),
            (Language::English, DayStatus::EarlyDeparture(minutes)) => {
                format!("{minutes} min (left early)")
            }
        }
    }

    /// Report title.
    pub fn report_title(&self) -> &'static str {
        match self {
            Language::Spanish => "INFORME DE ASISTENCIA MENSUAL",
            Language::English => "MONTHLY ATTENDANCE REPORT",
        }
    }

    /// Table headings: date, weekday, entry, exit, duration, overtime, status.
    pub fn column_headings(&self) -> [&'static str; 7] {
        match self {
            Language::Spanish => [
                "Fecha",
                "Día",
                "Entrada",
                "Salida",
                "Duración",
                "Horas Extras",
                "Estado",
            ],
            Language::English => [
                "Date", "Weekday", "Entry", "Exit", "Duration", "Overtime", "Status",
            ],
        }
    }

    /// Header labels for the worker's name and identifier.
    pub fn worker_labels(&self) -> [&'static str; 2] {
        match self {
            Language::Spanish => ["Nombre", "RUT"],
            Language::English => ["Name", "ID"],
        }
    }

    /// Label printed before the total delay figure.
    pub fn total_delay_label(&self) -> &'static str {
        match self {
            Language::Spanish => "Total de minutos de atraso:",
            Language::English => "Total delay minutes:",
        }
    }

    /// Signature captions for worker and supervisor.
    pub fn signature_labels(&self) -> [&'static str; 2] {
        match self {
            Language::Spanish => ["Firma Trabajador:", "Firma Supervisor:"],
            Language::English => ["Worker signature:", "Supervisor signature:"],
        }
    }

    /// Page footer text.
    pub fn page_label(&self, page: usize) -> String {
        match self {
            Language::Spanish => format!("Página {page}"),
            Language::English => format!("Page {page}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Ok(Language::Spanish),
            "en" => Ok(Language::English),
            _ => Err(EngineError::UnsupportedLanguage {
                tag: tag.to_string(),
            }),
        }
    }
}
