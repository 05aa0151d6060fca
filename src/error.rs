//! Error types for the attendance engine.
//!
//! Time fields that fail to parse are never errors (they become absent
//! values); everything in this module is fatal for the file being processed.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::MissingColumn {
///     column: "Entrada".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required column not found: Entrada");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// An attendance sheet could not be opened.
    #[error("Attendance sheet not found: {path}")]
    SourceNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// An attendance sheet could not be decoded.
    #[error("Failed to read attendance sheet '{path}': {message}")]
    SourceParseError {
        /// The path of the sheet.
        path: String,
        /// A description of the decoding error.
        message: String,
    },

    /// A required column is missing from the sheet header.
    #[error("Required column not found: {column}")]
    MissingColumn {
        /// The configured column name.
        column: String,
    },

    /// A required value is blank.
    #[error("Missing value for '{field}' in row {row}")]
    MissingField {
        /// One-based data row number.
        row: usize,
        /// The field that was blank.
        field: String,
    },

    /// The sheet holds no data rows, so the worker cannot be identified.
    #[error("Attendance sheet contains no data rows")]
    EmptySource,

    /// A language tag has no label table.
    #[error("Unsupported language: {tag}")]
    UnsupportedLanguage {
        /// The tag as supplied.
        tag: String,
    },

    /// A rendered document could not be produced or written.
    #[error("Failed to render report '{document}': {message}")]
    RenderError {
        /// Destination path or worker name identifying the document.
        document: String,
        /// A description of the failure.
        message: String,
    },

    /// Any of the above, tagged with the file that was being processed.
    #[error("Error processing file '{file}': {source}")]
    FileFailed {
        /// The source file name.
        file: String,
        /// The underlying failure.
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Wraps this error with the identity of the file being processed.
    ///
    /// Already wrapped errors are returned unchanged.
    pub fn for_file(self, file: impl Into<String>) -> Self {
        match self {
            wrapped @ EngineError::FileFailed { .. } => wrapped,
            other => EngineError::FileFailed {
                file: file.into(),
                source: Box::new(other),
            },
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
