//! Performance benchmarks for the attendance engine.
//!
//! Covers single-day evaluation, aggregation of a month of days, sheet
//! parsing and the full `POST /report` round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use attendance_engine::api::{create_router, AppState};
use attendance_engine::calculation::{SchedulePolicy, aggregate_days, evaluate_day};
use attendance_engine::config::{ReportConfig, SourceConfig};
use attendance_engine::models::{AttendanceDay, ClockTime};
use attendance_engine::report::Language;
use attendance_engine::source::parse_sheet;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds `count` consecutive days starting on a Monday with a mix of on-time,
/// late, early-departure and missing records.
fn create_days(count: usize) -> Vec<AttendanceDay> {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    (0..count)
        .map(|i| {
            let date = start + chrono::Duration::days(i as i64);
            let (entry, exit) = match i % 4 {
                0 => (ClockTime::from_hms(8, 0, 0), ClockTime::from_hms(17, 30, 0)),
                1 => (ClockTime::from_hms(8, 20, 0), ClockTime::from_hms(17, 0, 0)),
                2 => (ClockTime::from_hms(8, 10, 0), ClockTime::from_hms(17, 5, 0)),
                _ => (None, ClockTime::from_hms(16, 30, 0)),
            };
            AttendanceDay::new(date, entry, exit)
        })
        .collect()
}

/// Renders `count` days as a sheet export with a footer line.
fn create_sheet(count: usize) -> String {
    let mut csv = String::from("Nombre,Rut,Fecha,Entrada,Salida\n");
    for day in create_days(count) {
        let clock = |time: Option<ClockTime>| time.map(|t| t.to_string()).unwrap_or_default();
        csv.push_str(&format!(
            "Ana Rojas,12.345.678-9,{:02}-{:02}-{},{},{}\n",
            day.date.day(),
            day.date.month(),
            day.date.year(),
            clock(day.entry),
            clock(day.exit),
        ));
    }
    csv.push_str(&format!("Total registros: {count},,,,\n"));
    csv
}

fn create_request_body(count: usize) -> String {
    let days: Vec<serde_json::Value> = create_days(count)
        .iter()
        .map(|day| {
            serde_json::json!({
                "date": day.date,
                "entry": day.entry.map(|t| t.to_string()),
                "exit": day.exit.map(|t| t.to_string()),
            })
        })
        .collect();

    serde_json::json!({
        "worker": {"name": "Ana Rojas", "id": "12.345.678-9"},
        "days": days
    })
    .to_string()
}

/// Benchmark: evaluation of one late day.
fn bench_single_day(c: &mut Criterion) {
    let policy = SchedulePolicy::default();
    let day = create_days(2).remove(1);
    let schedule = policy.schedule_for(day.weekday());

    c.bench_function("evaluate_single_day", |b| {
        b.iter(|| black_box(evaluate_day(black_box(&day), &schedule)))
    });
}

/// Benchmark: aggregation over month-sized inputs.
fn bench_aggregate(c: &mut Criterion) {
    let policy = SchedulePolicy::default();
    let mut group = c.benchmark_group("aggregate_days");

    for count in [1usize, 7, 31, 366] {
        let days = create_days(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("days", count), &days, |b, days| {
            b.iter(|| black_box(aggregate_days(days, &policy, Language::Spanish)))
        });
    }

    group.finish();
}

/// Benchmark: sheet parsing of a month export.
fn bench_parse_sheet(c: &mut Criterion) {
    let config = SourceConfig::default();
    let sheet = create_sheet(31);

    let mut group = c.benchmark_group("parse_sheet");
    group.throughput(Throughput::Bytes(sheet.len() as u64));
    group.bench_function("month", |b| {
        b.iter(|| black_box(parse_sheet(sheet.as_bytes(), &config).unwrap()))
    });
    group.finish();
}

/// Benchmark: HTTP round trip for a month of days.
fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ReportConfig::default()));
    let body = create_request_body(31);

    c.bench_function("report_endpoint_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_day,
    bench_aggregate,
    bench_parse_sheet,
    bench_report_endpoint,
);
criterion_main!(benches);
