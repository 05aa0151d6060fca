//! HTTP request handlers for the attendance report API.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ReportAggregator, SchedulePolicy, evaluate_day};
use crate::error::EngineResult;
use crate::models::{AttendanceDay, Worker};
use crate::report::{Language, assemble_report};

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

fn error_response(status: StatusCode, error: ApiError) -> axum::response::Response {
    ApiErrorResponse { status, error }.into_response()
}

/// Handler for POST /report.
///
/// Evaluates the submitted days and returns the assembled report together
/// with the per-day evaluations.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    for (field, value) in [("worker.name", &request.worker.name), ("worker.id", &request.worker.id)] {
        if value.trim().is_empty() {
            warn!(correlation_id = %correlation_id, field, "Empty worker field");
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(format!("{field} must not be empty")),
            );
        }
    }

    let config = state.config();
    let language = match resolve_language(request.language.as_deref(), config.language) {
        Ok(language) => language,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected language");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let days: Vec<AttendanceDay> = request.days.into_iter().map(Into::into).collect();
    let response = build_response(request.worker, &days, &config.schedule, language);

    info!(
        correlation_id = %correlation_id,
        report_id = %response.report_id,
        worker_id = %response.report.worker.id,
        days = days.len(),
        total_delay_minutes = response.report.summary.total_delay_minutes,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Report generated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn resolve_language(tag: Option<&str>, default: Language) -> EngineResult<Language> {
    match tag {
        Some(tag) => tag.parse(),
        None => Ok(default),
    }
}

/// Evaluates, aggregates and assembles one worker's days.
fn build_response(
    worker: Worker,
    days: &[AttendanceDay],
    policy: &SchedulePolicy,
    language: Language,
) -> ReportResponse {
    let mut aggregator = ReportAggregator::new(language);
    let mut evaluations = Vec::with_capacity(days.len());
    for day in days {
        let result = evaluate_day(day, &policy.schedule_for(day.weekday()));
        aggregator.push(day, &result);
        evaluations.push(result);
    }

    ReportResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        language,
        report: assemble_report(worker, aggregator.finish(), language),
        evaluations,
    }
}
