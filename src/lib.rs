//! Attendance Interpretation Engine
//!
//! Turns per-worker clock-in/clock-out logs into attendance reports that flag
//! late arrivals, early departures and overtime, and total the minutes of
//! delay for each worker.

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
