//! Study plan ingestion.
//!
//! This crate loads a study plan spreadsheet into in-memory sheet grids.
//! Downstream extraction never touches the file: it works on [`SheetGrid`]s
//! obtained through the [`SheetSource`] trait.
//!
//! # Features
//!
//! - **Workbook Loading**: Read `.xlsx`, `.xlsm`, `.xls` and `.ods` files with calamine
//! - **Blank Normalization**: Empty, whitespace-only and error cells become `None`
//! - **A1 Anchoring**: Grids keep absolute column positions even when leading columns are empty
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use curriculum_ingest::{SheetSource, Workbook};
//!
//! let workbook = Workbook::open(Path::new("plan.xlsx"), &["Table 1", "Table 2"])?;
//! let disciplines = workbook.sheet("Table 2")?;
//! println!("{} rows", disciplines.height());
//! ```

mod error;
mod grid;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Grids ===
pub use grid::{SheetGrid, cell_from_data};

// === Workbook Loading ===
pub use workbook::{SheetSource, Workbook};
