//! Packaging worker data, rows and totals for renderers.

use std::path::{Path, PathBuf};

use crate::calculation::AggregatedReport;
use crate::models::{AttendanceReport, Worker};

use super::Language;

/// Default prefix of generated report files.
pub const DEFAULT_OUTPUT_PREFIX: &str = "Informe_";

/// Builds the renderer-facing report for one worker.
///
/// Pure data shaping: rows keep their order and the summary is copied as is.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{SchedulePolicy, aggregate_days};
/// use attendance_engine::models::Worker;
/// use attendance_engine::report::{Language, assemble_report};
///
/// let worker = Worker { name: "Ana Rojas".to_string(), id: "12.345.678-9".to_string() };
/// let aggregated = aggregate_days(&[], &SchedulePolicy::default(), Language::Spanish);
/// let report = assemble_report(worker, aggregated, Language::Spanish);
///
/// assert_eq!(report.title, "INFORME DE ASISTENCIA MENSUAL");
/// assert_eq!(report.columns.len(), 7);
/// ```
pub fn assemble_report(
    worker: Worker,
    aggregated: AggregatedReport,
    language: Language,
) -> AttendanceReport {
    let [worker_signature, supervisor_signature] = language.signature_labels();
    AttendanceReport {
        title: language.report_title().to_string(),
        worker,
        columns: language
            .column_headings()
            .iter()
            .map(|heading| heading.to_string())
            .collect(),
        rows: aggregated.rows,
        summary: aggregated.summary,
        total_delay_label: language.total_delay_label().to_string(),
        signature_labels: [
            worker_signature.to_string(),
            supervisor_signature.to_string(),
        ],
    }
}

/// File name for a worker's report: `<prefix><name>.<extension>` with spaces
/// in the name replaced by underscores.
///
/// ```
/// use attendance_engine::report::output_file_name;
///
/// assert_eq!(output_file_name("Informe_", "Ana Rojas Soto", "pdf"), "Informe_Ana_Rojas_Soto.pdf");
/// ```
pub fn output_file_name(prefix: &str, worker_name: &str, extension: &str) -> String {
    format!("{prefix}{}.{extension}", worker_name.replace(' ', "_"))
}

/// Path of the report written beside `source`.
pub fn output_path(source: &Path, prefix: &str, worker_name: &str, extension: &str) -> PathBuf {
    let file_name = output_file_name(prefix, worker_name, extension);
    match source.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{SchedulePolicy, aggregate_days};
    use crate::models::{AttendanceDay, ClockTime};
    use chrono::NaiveDate;

    fn worker() -> Worker {
        Worker {
            name: "Juan Pérez".to_string(),
            id: "11.111.111-1".to_string(),
        }
    }

    #[test]
    fn test_assembled_report_keeps_rows_and_summary() {
        let days = vec![
            AttendanceDay::new(
                NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
                ClockTime::from_hms(8, 30, 0),
                ClockTime::from_hms(17, 0, 0),
            ),
            AttendanceDay::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), None, None),
        ];
        let aggregated = aggregate_days(&days, &SchedulePolicy::default(), Language::Spanish);
        let expected_rows = aggregated.rows.clone();
        let expected_summary = aggregated.summary.clone();

        let report = assemble_report(worker(), aggregated, Language::Spanish);

        assert_eq!(report.worker, worker());
        assert_eq!(report.rows, expected_rows);
        assert_eq!(report.summary, expected_summary);
        assert_eq!(report.rows[0].date, "04-03-2025");
        assert_eq!(
            report.columns,
            vec!["Fecha", "Día", "Entrada", "Salida", "Duración", "Horas Extras", "Estado"]
        );
        assert_eq!(report.total_delay_label, "Total de minutos de atraso:");
        assert_eq!(report.signature_labels[1], "Firma Supervisor:");
    }

    #[test]
    fn test_english_headings() {
        let aggregated = aggregate_days(&[], &SchedulePolicy::default(), Language::English);
        let report = assemble_report(worker(), aggregated, Language::English);
        assert_eq!(report.title, "MONTHLY ATTENDANCE REPORT");
        assert_eq!(report.columns[5], "Overtime");
    }

    #[test]
    fn test_output_file_name_replaces_spaces_only() {
        assert_eq!(
            output_file_name(DEFAULT_OUTPUT_PREFIX, "Juan Pérez", "txt"),
            "Informe_Juan_Pérez.txt"
        );
    }

    #[test]
    fn test_output_path_is_beside_source() {
        let path = output_path(
            Path::new("/data/marzo/asistencia.csv"),
            DEFAULT_OUTPUT_PREFIX,
            "Juan Pérez",
            "json",
        );
        assert_eq!(path, PathBuf::from("/data/marzo/Informe_Juan_Pérez.json"));
    }

    #[test]
    fn test_output_path_for_bare_file_name() {
        let path = output_path(Path::new("asistencia.csv"), "R_", "Ana", "txt");
        assert_eq!(path, PathBuf::from("R_Ana.txt"));
    }
}
