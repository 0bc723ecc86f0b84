//! Error types for study plan extraction.

use std::path::PathBuf;

use curriculum_ingest::IngestError;
use thiserror::Error;

/// Errors that abort an extraction run.
///
/// Blank or suppressed rows are not errors; they are skipped silently.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Loading the workbook or looking up a sheet failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Template configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The header row is missing from the sheet.
    #[error("sheet '{sheet}' has no header row {row}")]
    MissingHeaderRow { sheet: String, row: usize },

    /// A configured column could not be located in the header row.
    #[error("sheet '{sheet}': column {selector} not found in header row {row}")]
    MissingColumn {
        sheet: String,
        selector: String,
        row: usize,
    },

    /// A positional (unnamed) column carries a header it should not have.
    #[error("sheet '{sheet}': expected {selector} to have a blank header, found '{found}'")]
    UnexpectedHeader {
        sheet: String,
        selector: String,
        found: String,
    },

    /// A count or hours cell is not a non-negative integer.
    #[error("sheet '{sheet}' cell {column}{row}: invalid {field} value '{value}'")]
    InvalidNumber {
        sheet: String,
        /// 1-based spreadsheet row.
        row: usize,
        /// Spreadsheet column letter.
        column: String,
        field: String,
        value: String,
    },
}

/// Errors raised while loading or checking a template configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid template: {message}")]
    Invalid { message: String },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ParseError>;
