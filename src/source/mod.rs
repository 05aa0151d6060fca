//! Attendance sheet reading.
//!
//! Sheets are CSV exports with one row per day. This module is the single
//! place where dates are validated: rows whose date does not match the
//! configured format are dropped here and never reach the evaluator.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{ClockField, classify_clock_field};
use crate::config::SourceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceDay, ClockTime, Worker};

/// The worker and the valid days read from one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    /// Worker taken from the first data row.
    pub worker: Worker,
    /// Days with a valid date, in sheet order.
    pub days: Vec<AttendanceDay>,
    /// Data rows dropped because of an unparsable date.
    pub skipped_rows: usize,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    name: usize,
    id: usize,
    date: usize,
    entry: usize,
    exit: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, config: &SourceConfig) -> EngineResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim() == column.trim())
                .ok_or_else(|| EngineError::MissingColumn {
                    column: column.to_string(),
                })
        };
        let columns = &config.columns;
        Ok(Self {
            name: find(&columns.name)?,
            id: find(&columns.id)?,
            date: find(&columns.date)?,
            entry: find(&columns.entry)?,
            exit: find(&columns.exit)?,
        })
    }
}

/// Reads an attendance sheet from a file.
pub fn read_sheet<P: AsRef<Path>>(path: P, config: &SourceConfig) -> EngineResult<AttendanceSheet> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|_| EngineError::SourceNotFound {
        path: path_str.clone(),
    })?;

    parse_sheet(file, config).map_err(|err| match err {
        EngineError::SourceParseError { message, .. } => EngineError::SourceParseError {
            path: path_str,
            message,
        },
        other => other,
    })
}

/// Reads an attendance sheet from any reader.
///
/// The configured number of footer rows is dropped before anything else, so
/// a summary line at the end of the export never becomes a day.
///
/// # Example
///
/// ```
/// use attendance_engine::config::SourceConfig;
/// use attendance_engine::source::parse_sheet;
///
/// let csv = "Nombre,Rut,Fecha,Entrada,Salida\n\
///            Ana Rojas,1-9,03-03-2025,08:05:00,17:10:00\n\
///            Total,,,,\n";
/// let sheet = parse_sheet(csv.as_bytes(), &SourceConfig::default()).unwrap();
/// assert_eq!(sheet.worker.name, "Ana Rojas");
/// assert_eq!(sheet.days.len(), 1);
/// ```
pub fn parse_sheet<R: Read>(reader: R, config: &SourceConfig) -> EngineResult<AttendanceSheet> {
    let parse_error = |e: csv::Error| EngineError::SourceParseError {
        path: "<reader>".to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = decode_record(reader.byte_headers().map_err(parse_error)?, 0);
    let index = ColumnIndex::resolve(&headers, config)?;

    let mut records = reader
        .byte_records()
        .enumerate()
        .map(|(position, record)| record.map(|record| decode_record(&record, position + 1)))
        .collect::<Result<Vec<StringRecord>, _>>()
        .map_err(parse_error)?;

    let kept = records.len().saturating_sub(config.footer_rows);
    if kept < records.len() {
        debug!(footer_rows = records.len() - kept, "Dropping footer rows");
    }
    records.truncate(kept);

    let first = records.first().ok_or(EngineError::EmptySource)?;
    let worker = Worker {
        name: required_field(first, index.name, &config.columns.name)?,
        id: required_field(first, index.id, &config.columns.id)?,
    };

    let mut days = Vec::with_capacity(records.len());
    let mut skipped_rows = 0;
    for (position, record) in records.iter().enumerate() {
        let row = position + 1;
        let raw_date = record.get(index.date).unwrap_or_default();
        let date = match NaiveDate::parse_from_str(raw_date, &config.date_format) {
            Ok(date) => date,
            Err(_) => {
                debug!(row, value = raw_date, "Skipping row with unparsable date");
                skipped_rows += 1;
                continue;
            }
        };

        days.push(AttendanceDay::new(
            date,
            clock_field(record, index.entry, row, &config.columns.entry),
            clock_field(record, index.exit, row, &config.columns.exit),
        ));
    }

    Ok(AttendanceSheet {
        worker,
        days,
        skipped_rows,
    })
}

/// Decodes a raw record, replacing bytes that are not UTF-8.
///
/// Legacy spreadsheet exports are often Windows-1252; a stray accented byte
/// must not cost the whole sheet.
fn decode_record(record: &ByteRecord, row: usize) -> StringRecord {
    let mut lossy = false;
    let decoded: StringRecord = record
        .iter()
        .map(|field| {
            let text = String::from_utf8_lossy(field);
            lossy |= matches!(text, Cow::Owned(_));
            text
        })
        .collect();
    if lossy {
        debug!(row, "Replaced bytes that are not valid UTF-8");
    }
    decoded
}

fn required_field(record: &StringRecord, index: usize, column: &str) -> EngineResult<String> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(EngineError::MissingField {
            row: 1,
            field: column.to_string(),
        }),
    }
}

fn clock_field(record: &StringRecord, index: usize, row: usize, column: &str) -> Option<ClockTime> {
    let field = classify_clock_field(record.get(index).unwrap_or_default());
    if let ClockField::Malformed(ref value) = field {
        debug!(row, column, value = %value, "Treating malformed time as missing");
    }
    field.time()
}
