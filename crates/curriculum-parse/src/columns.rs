//! Header-validated column mapping for the discipline sheet.

use curriculum_ingest::SheetGrid;

use crate::config::{ColumnSelector, DisciplineLayout};
use crate::error::{ParseError, Result};

/// Resolved 0-based column indices for every discipline field.
///
/// Built once per document; a template that does not match the header row
/// fails here instead of producing misaligned records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub index: usize,
    pub name: usize,
    pub forms_control: Vec<usize>,
    pub lecture_hours: usize,
    pub labs_hours: usize,
    pub practice_hours: usize,
    pub csr_hours: usize,
    pub semesters: Vec<usize>,
    pub department: usize,
}

impl ColumnMap {
    /// Resolves every selector of `layout` against the header row of `grid`.
    pub fn resolve(grid: &SheetGrid, header_row: usize, layout: &DisciplineLayout) -> Result<Self> {
        if header_row >= grid.height() {
            return Err(ParseError::MissingHeaderRow {
                sheet: grid.name().to_string(),
                row: header_row + 1,
            });
        }
        let find = |selector: &ColumnSelector| resolve_selector(grid, header_row, selector);

        let map = Self {
            index: find(&layout.index)?,
            name: find(&layout.name)?,
            forms_control: layout
                .forms_control
                .iter()
                .map(find)
                .collect::<Result<_>>()?,
            lecture_hours: find(&layout.lecture_hours)?,
            labs_hours: find(&layout.labs_hours)?,
            practice_hours: find(&layout.practice_hours)?,
            csr_hours: find(&layout.csr_hours)?,
            semesters: layout.semesters.iter().map(find).collect::<Result<_>>()?,
            department: find(&layout.department)?,
        };
        tracing::debug!(sheet = grid.name(), columns = ?map.positions(), "resolved column map");
        Ok(map)
    }

    /// All indices in selector order.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = vec![self.index, self.name];
        positions.extend(&self.forms_control);
        positions.extend([
            self.lecture_hours,
            self.labs_hours,
            self.practice_hours,
            self.csr_hours,
        ]);
        positions.extend(&self.semesters);
        positions.push(self.department);
        positions
    }
}

fn resolve_selector(grid: &SheetGrid, header_row: usize, selector: &ColumnSelector) -> Result<usize> {
    let missing = || ParseError::MissingColumn {
        sheet: grid.name().to_string(),
        selector: selector.to_string(),
        row: header_row + 1,
    };
    match selector {
        ColumnSelector::Header(name) => (0..grid.width())
            .find(|&col| {
                grid.cell(header_row, col)
                    .is_some_and(|cell| cell.to_string().trim() == name.trim())
            })
            .ok_or_else(missing),
        ColumnSelector::Position(col) => {
            if *col >= grid.width() {
                return Err(missing());
            }
            match grid.cell(header_row, *col) {
                None => Ok(*col),
                Some(found) => Err(ParseError::UnexpectedHeader {
                    sheet: grid.name().to_string(),
                    selector: selector.to_string(),
                    found: found.to_string(),
                }),
            }
        }
    }
}
