//! Error types for study plan ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a study plan workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook file not found.
    #[error("workbook file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Workbook could not be opened or is not a spreadsheet.
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Requested sheet is not present in the workbook.
    #[error("sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    /// Sheet exists but its cells could not be read.
    #[error("failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
