//! Workbook loading.

use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::grid::SheetGrid;

/// Source of loaded sheet grids, addressed by sheet name.
pub trait SheetSource {
    /// Returns the grid for the named sheet.
    fn sheet(&self, name: &str) -> Result<&SheetGrid>;
}

/// A set of eagerly loaded sheets.
///
/// The underlying file is closed once [`Workbook::open`] returns; all later
/// access works on the in-memory grids.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    path: Option<PathBuf>,
    sheets: Vec<SheetGrid>,
}

impl Workbook {
    /// Opens a spreadsheet and loads the requested sheets.
    ///
    /// Every name in `sheet_names` must exist in the file.
    pub fn open(path: &Path, sheet_names: &[&str]) -> Result<Self> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        // The reader owns the file handle and is dropped on every return path.
        let mut reader = open_workbook_auto(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let available = reader.sheet_names();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for &name in sheet_names {
            if !available.iter().any(|candidate| candidate == name) {
                return Err(IngestError::SheetNotFound {
                    sheet: name.to_string(),
                    available,
                });
            }
            let range = reader
                .worksheet_range(name)
                .map_err(|source| IngestError::SheetRead {
                    sheet: name.to_string(),
                    source,
                })?;
            let grid = SheetGrid::from_range(name, &range);
            tracing::debug!(
                path = %path.display(),
                sheet = name,
                rows = grid.height(),
                columns = grid.width(),
                "loaded sheet"
            );
            sheets.push(grid);
        }

        tracing::info!(
            path = %path.display(),
            sheets = sheets.len(),
            "workbook loaded"
        );
        Ok(Self {
            path: Some(path.to_path_buf()),
            sheets,
        })
    }

    /// Builds a workbook from grids that are already in memory.
    pub fn from_grids(sheets: Vec<SheetGrid>) -> Self {
        Self { path: None, sheets }
    }

    /// Path the workbook was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Names of the loaded sheets, in load order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(SheetGrid::name).collect()
    }
}

impl SheetSource for Workbook {
    fn sheet(&self, name: &str) -> Result<&SheetGrid> {
        self.sheets
            .iter()
            .find(|grid| grid.name() == name)
            .ok_or_else(|| IngestError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheets.iter().map(|g| g.name().to_string()).collect(),
            })
    }
}
