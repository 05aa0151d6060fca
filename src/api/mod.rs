//! HTTP API module for the attendance engine.
//!
//! Exposes `POST /report`, which evaluates attendance days sent as JSON and
//! returns the assembled report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayRequest, ReportRequest};
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
