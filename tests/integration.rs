//! Integration tests for the attendance engine.
//!
//! Covers the full file pipeline (sheet -> evaluation -> rendered report on
//! disk), the shipped configuration, and the HTTP API.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::batch::BatchProcessor;
use attendance_engine::calculation::{SchedulePolicy, aggregate_days};
use attendance_engine::config::{ConfigLoader, ReportConfig};
use attendance_engine::models::AttendanceReport;
use attendance_engine::report::{Language, OutputFormat};
use attendance_engine::source::read_sheet;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

const FIXTURE: &str = "tests/fixtures/asistencia_marzo.csv";

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE)
}

/// Copies the fixture into a scratch directory so reports land there.
fn staged_fixture(dir: &Path) -> PathBuf {
    let staged = dir.join("asistencia_marzo.csv");
    fs::copy(fixture_path(), &staged).unwrap();
    staged
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =============================================================================
// File pipeline
// =============================================================================

#[test]
fn test_fixture_sheet_is_read_with_single_date_boundary() {
    let sheet = read_sheet(fixture_path(), &ReportConfig::default().source).unwrap();
    assert_eq!(sheet.worker.name, "Juan Pérez Soto");
    assert_eq!(sheet.worker.id, "11.111.111-1");
    assert_eq!(sheet.days.len(), 6);
    assert_eq!(sheet.skipped_rows, 1);
}

#[test]
fn test_fixture_rows_and_summary() {
    let sheet = read_sheet(fixture_path(), &ReportConfig::default().source).unwrap();
    let report = aggregate_days(&sheet.days, &SchedulePolicy::default(), Language::Spanish);

    let statuses: Vec<&str> = report.rows.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(
        statuses,
        vec!["S/D", "16 min (E/T)", "5 min (N/R)", "S/D", "S/D", "S/D"]
    );

    let first = &report.rows[0];
    assert_eq!(first.date, "03-03-2025");
    assert_eq!(first.weekday, "Lunes");
    assert_eq!(first.duration, "09:30");
    assert_eq!(first.overtime, "00:30");

    // Thursday inside the grace window: overtime counts from 17:10.
    assert_eq!(report.rows[3].overtime, "00:10");

    // Friday without entry: overtime against the 16:00 baseline only.
    let friday = &report.rows[4];
    assert_eq!(friday.weekday, "Viernes");
    assert_eq!(friday.entry, "Sin registro");
    assert_eq!(friday.duration, "No calculable");
    assert_eq!(friday.overtime, "00:30");

    let last = &report.rows[5];
    assert_eq!(last.exit, "Sin registro");
    assert_eq!(last.duration, "No calculable");

    let summary = &report.summary;
    assert_eq!(summary.total_delay_minutes, 21);
    assert_eq!(summary.days_evaluated, 6);
    assert_eq!(summary.late_days, 1);
    assert_eq!(summary.early_departure_days, 1);
    assert_eq!(summary.days_without_entry, 1);
    assert_eq!(summary.worked_hours, dec("36.32"));
    assert_eq!(summary.overtime_hours, dec("1.17"));
}

#[test]
fn test_batch_writes_text_report_beside_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = staged_fixture(dir.path());

    let summary = BatchProcessor::new(ReportConfig::default()).run([&sheet]);

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 1);
    let output = dir.path().join("Informe_Juan_Pérez_Soto.txt");
    assert_eq!(summary.outputs, vec![output.clone()]);

    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("INFORME DE ASISTENCIA MENSUAL"));
    assert!(text.contains("Nombre: Juan Pérez Soto"));
    assert!(text.contains("RUT: 11.111.111-1"));
    assert!(text.contains("Total de minutos de atraso: 21"));
    assert!(text.contains("Firma Trabajador:"));
    assert!(text.contains("Página 1"));
}

#[test]
fn test_batch_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = staged_fixture(dir.path());
    let mut config = ReportConfig::default();
    config.output.format = OutputFormat::Json;
    config.language = Language::English;

    let summary = BatchProcessor::new(config).run([&sheet]);
    assert!(summary.all_succeeded());

    let bytes = fs::read(dir.path().join("Informe_Juan_Pérez_Soto.json")).unwrap();
    let report: AttendanceReport = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report.title, "MONTHLY ATTENDANCE REPORT");
    assert_eq!(report.rows[1].status, "16 min (late)");
    assert_eq!(report.rows[4].weekday, "Friday");
    assert_eq!(report.summary.total_delay_minutes, 21);
}

#[test]
fn test_batch_continues_after_failing_file() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("roto.csv");
    fs::write(&broken, "Nombre,Fecha\nAna,03-03-2025\nTotal,\n").unwrap();
    let sheet = staged_fixture(dir.path());

    let summary = BatchProcessor::new(ReportConfig::default()).run([&broken, &sheet]);

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].file, broken);
    assert_eq!(summary.failures[0].message, "Required column not found: Rut");
}

#[test]
fn test_processing_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = staged_fixture(dir.path());
    let processor = BatchProcessor::new(ReportConfig::default());

    let first = processor.build_report(&sheet).unwrap();
    let second = processor.build_report(&sheet).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/report.yaml");
    let config = ConfigLoader::load(path).unwrap();
    assert_eq!(config, ReportConfig::default());
}

// =============================================================================
// HTTP API
// =============================================================================

fn create_test_router() -> Router {
    create_router(AppState::new(ReportConfig::default()))
}

async fn post_report(router: Router, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(days: Vec<Value>) -> Value {
    json!({
        "worker": {"name": "Ana Rojas", "id": "12.345.678-9"},
        "days": days
    })
}

#[tokio::test]
async fn test_api_report_for_three_days() {
    let body = create_request(vec![
        json!({"date": "2025-03-04", "entry": "08:10:00", "exit": "17:00:00"}),
        json!({"date": "2025-03-05", "entry": "08:00:00", "exit": "17:30:00"}),
        json!({"date": "2025-03-06", "entry": "08:20:00", "exit": "17:00:00"}),
    ]);

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["summary"]["total_delay_minutes"], 30);
    assert_eq!(json["report"]["rows"][0]["status"], "10 min (N/R)");
    assert_eq!(json["report"]["rows"][1]["duration"], "09:30");
    assert_eq!(json["report"]["rows"][2]["status"], "20 min (E/T)");
    assert_eq!(json["language"], "es");
    assert_eq!(
        json["evaluations"][0]["status"],
        json!({"kind": "early_departure", "minutes": 10})
    );
    assert_eq!(json["evaluations"][0]["expected_exit"], "17:10:00");
    assert!(json["report_id"].is_string());
}

#[tokio::test]
async fn test_api_treats_malformed_times_as_missing() {
    let body = create_request(vec![
        json!({"date": "2025-03-04", "entry": "8am", "exit": "17:20:00"}),
    ]);

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let row = &json["report"]["rows"][0];
    assert_eq!(row["entry"], "Sin registro");
    assert_eq!(row["duration"], "No calculable");
    assert_eq!(row["overtime"], "00:20");
    assert_eq!(row["status"], "S/D");
}

#[tokio::test]
async fn test_api_english_labels() {
    let mut body = create_request(vec![json!({"date": "2025-03-07", "entry": "08:16:00"})]);
    body["language"] = json!("en-US");

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "en");
    assert_eq!(json["report"]["rows"][0]["weekday"], "Friday");
    assert_eq!(json["report"]["rows"][0]["status"], "16 min (late)");
}

#[tokio::test]
async fn test_api_rejects_unknown_language() {
    let mut body = create_request(vec![]);
    body["language"] = json!("fr");

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_LANGUAGE");
}

#[tokio::test]
async fn test_api_rejects_invalid_date() {
    let body = create_request(vec![json!({"date": "31-02-2025", "entry": "08:00:00"})]);

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_api_missing_worker_is_validation_error() {
    let body = json!({"days": []});

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_rejects_blank_worker_name() {
    let body = json!({"worker": {"name": "  ", "id": "1-9"}, "days": []});

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_rejects_blank_worker_id() {
    let body = json!({"worker": {"name": "Ana Rojas", "id": ""}, "days": []});

    let (status, json) = post_report(create_test_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "worker.id must not be empty");
}

#[tokio::test]
async fn test_api_syntax_error() {
    let (status, json) = post_report(create_test_router(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}
