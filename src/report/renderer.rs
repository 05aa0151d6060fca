//! Document renderers for assembled reports.
//!
//! Renderers turn an [`AttendanceReport`] into bytes; [`write_report`] puts
//! those bytes on disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceReport, ReportRow};

use super::Language;

/// Default number of table rows per text page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// Character widths of the seven table columns.
const COLUMN_WIDTHS: [usize; 7] = [12, 11, 14, 14, 14, 14, 16];

/// Produces a document from an assembled report.
pub trait DocumentRenderer {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the report.
    fn render(&self, report: &AttendanceReport) -> EngineResult<Vec<u8>>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Paginated plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Builds the renderer for this format.
    pub fn renderer(&self, language: Language, rows_per_page: usize) -> Box<dyn DocumentRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(language, rows_per_page)),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Renders the report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &AttendanceReport) -> EngineResult<Vec<u8>> {
        serde_json::to_vec_pretty(report).map_err(|e| EngineError::RenderError {
            document: report.worker.name.clone(),
            message: e.to_string(),
        })
    }
}

/// Renders the report as a paginated plain-text document.
///
/// Each page repeats the title and column header and ends with a numbered
/// footer. The last page carries the total delay line and two signature
/// lines. Pages are separated by form feeds.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    language: Language,
    rows_per_page: usize,
}

impl TextRenderer {
    /// Creates a text renderer. A `rows_per_page` of zero is treated as one.
    pub fn new(language: Language, rows_per_page: usize) -> Self {
        Self {
            language,
            rows_per_page: rows_per_page.max(1),
        }
    }

    fn line_width() -> usize {
        COLUMN_WIDTHS.iter().sum::<usize>() + COLUMN_WIDTHS.len() + 1
    }

    fn centered(text: &str) -> String {
        format!("{:^width$}", text, width = Self::line_width())
            .trim_end()
            .to_string()
    }

    fn table_line(cells: &[&str]) -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
            line.push_str(&format!("{:<width$}|", cell));
        }
        line
    }

    fn separator() -> String {
        let mut line = String::from("+");
        for width in COLUMN_WIDTHS {
            line.push_str(&"-".repeat(width));
            line.push('+');
        }
        line
    }

    fn page_header(&self, report: &AttendanceReport, lines: &mut Vec<String>) {
        lines.push(Self::centered(&report.title));
        lines.push(String::new());
        let columns: Vec<&str> = report.columns.iter().map(String::as_str).collect();
        lines.push(Self::separator());
        lines.push(Self::table_line(&columns));
        lines.push(Self::separator());
    }

    fn row_line(row: &ReportRow) -> String {
        Self::table_line(&[
            row.date.as_str(),
            row.weekday.as_str(),
            row.entry.as_str(),
            row.exit.as_str(),
            row.duration.as_str(),
            row.overtime.as_str(),
            row.status.as_str(),
        ])
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &AttendanceReport) -> EngineResult<Vec<u8>> {
        let [name_label, id_label] = self.language.worker_labels();
        let mut pages: Vec<Vec<String>> = Vec::new();

        let chunks: Vec<&[ReportRow]> = if report.rows.is_empty() {
            vec![report.rows.as_slice()]
        } else {
            report.rows.chunks(self.rows_per_page).collect()
        };

        for (index, chunk) in chunks.iter().enumerate() {
            let mut lines = Vec::new();
            self.page_header(report, &mut lines);
            if index == 0 {
                lines.insert(2, format!("{name_label}: {}", report.worker.name));
                lines.insert(3, format!("{id_label}: {}", report.worker.id));
                lines.insert(4, String::new());
            }
            lines.extend(chunk.iter().map(Self::row_line));
            lines.push(Self::separator());
            pages.push(lines);
        }

        if let Some(last) = pages.last_mut() {
            last.push(format!(
                "{} {}",
                report.total_delay_label, report.summary.total_delay_minutes
            ));
            last.push(String::new());
            last.push(String::new());
            let [worker_signature, supervisor_signature] = &report.signature_labels;
            last.push(format!("{:<40}{}", worker_signature, supervisor_signature));
            last.push(String::new());
            last.push(format!("{:<40}{}", "_".repeat(32), "_".repeat(32)));
        }

        let page_count = pages.len();
        let mut document = String::new();
        for (index, mut lines) in pages.into_iter().enumerate() {
            lines.push(String::new());
            lines.push(Self::centered(&self.language.page_label(index + 1)));
            document.push_str(&lines.join("\n"));
            document.push('\n');
            if index + 1 < page_count {
                document.push('\u{0c}');
            }
        }

        Ok(document.into_bytes())
    }
}

/// Renders `report` and writes it to `path`.
pub fn write_report(
    renderer: &dyn DocumentRenderer,
    report: &AttendanceReport,
    path: &Path,
) -> EngineResult<()> {
    let bytes = renderer.render(report)?;
    fs::write(path, &bytes).map_err(|e| EngineError::RenderError {
        document: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Report written");
    Ok(())
}
