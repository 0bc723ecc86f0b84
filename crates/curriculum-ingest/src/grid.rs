//! In-memory sheet grids.

use calamine::{Data, Range};
use curriculum_model::CellValue;

/// A loaded sheet as a 2-D grid of optional cells.
///
/// Row 0 / column 0 is cell A1. Rows are padded to a common width, so
/// every `(row, col)` inside `height() x width()` is addressable.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    name: String,
    width: usize,
    rows: Vec<Vec<Option<CellValue>>>,
}

impl SheetGrid {
    /// Creates a grid from row data, padding short rows with blanks.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Option<CellValue>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self {
            name: name.into(),
            width,
            rows,
        }
    }

    /// Creates an empty grid.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::from_rows(name, Vec::new())
    }

    /// Converts a calamine range, re-anchoring it at A1.
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let (row_offset, col_offset) = range
            .start()
            .map_or((0, 0), |(row, col)| (row as usize, col as usize));
        let mut rows: Vec<Vec<Option<CellValue>>> = vec![Vec::new(); row_offset];
        for source in range.rows() {
            let mut row = Vec::with_capacity(col_offset + source.len());
            row.resize(col_offset, None);
            row.extend(source.iter().map(cell_from_data));
            rows.push(row);
        }
        Self::from_rows(name, rows)
    }

    /// Sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `(row, col)`; `None` for blank or out-of-range cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<CellValue>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Index of the first row at or after `from` holding a non-blank cell.
    pub fn first_non_blank_row(&self, from: usize) -> Option<usize> {
        self.rows()
            .enumerate()
            .skip(from)
            .find(|(_, row)| row.iter().any(Option::is_some))
            .map(|(index, _)| index)
    }

    /// Iterates over the rendered text of every non-blank cell, row-major.
    pub fn text_cells(&self) -> impl Iterator<Item = String> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.iter().flatten())
            .map(ToString::to_string)
    }
}

/// Converts a calamine cell to the blank-aware cell model.
///
/// Empty cells, whitespace-only text and spreadsheet error values are blank.
pub fn cell_from_data(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Int(v) => Some(CellValue::Int(*v)),
        Data::Float(v) => Some(CellValue::Float(*v)),
        Data::Bool(v) => Some(CellValue::Bool(*v)),
        Data::DateTime(dt) => Some(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(err) => {
            tracing::debug!(error = ?err, "treating spreadsheet error cell as blank");
            None
        }
    }
}
