//! Discipline table extraction.
//!
//! Walks the discipline sheet below the header row and turns each included
//! row into a [`Discipline`]:
//!
//! - rows with a blank index are skipped
//! - elective alternatives other than the primary one (`…ДВ.x.1`) are skipped
//! - control form and hours cells decode to integers, blank meaning 0
//! - semester flag pairs decode to `(course, semester)` entries
//!
//! A non-numeric count or hours cell aborts the whole extraction.

use curriculum_ingest::SheetGrid;
use curriculum_model::{CellValue, ControlFormCount, CourseSemester, Discipline};

use crate::columns::ColumnMap;
use crate::config::{TemplateConfig, column_letter};
use crate::error::{ParseError, Result};

/// Why a row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankIndex,
    ElectiveAlternative,
}

/// Extracts disciplines from a sheet laid out per a [`TemplateConfig`].
#[derive(Debug, Clone, Copy)]
pub struct DisciplineExtractor<'a> {
    config: &'a TemplateConfig,
}

impl<'a> DisciplineExtractor<'a> {
    pub fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    /// Extracts all included rows, preserving sheet order.
    pub fn extract(&self, grid: &SheetGrid) -> Result<Vec<Discipline>> {
        self.config.validate()?;
        // Blank rows above the header are not part of the table
        let header_row = grid
            .first_non_blank_row(self.config.header_row)
            .unwrap_or(self.config.header_row);
        let columns = ColumnMap::resolve(grid, header_row, &self.config.layout)?;

        let mut disciplines = Vec::new();
        let mut skipped = 0usize;
        for row in (header_row + 1)..grid.height() {
            match self.skip_reason(grid, &columns, row) {
                Some(reason) => {
                    tracing::debug!(row = row + 1, ?reason, "skipping discipline row");
                    skipped += 1;
                }
                None => disciplines.push(self.decode_row(grid, &columns, row)?),
            }
        }

        tracing::info!(
            sheet = grid.name(),
            disciplines = disciplines.len(),
            skipped,
            "discipline extraction complete"
        );
        Ok(disciplines)
    }

    fn skip_reason(&self, grid: &SheetGrid, columns: &ColumnMap, row: usize) -> Option<SkipReason> {
        let Some(index) = grid.cell(row, columns.index) else {
            return Some(SkipReason::BlankIndex);
        };
        let index = index.to_string();
        if is_suppressed_elective(
            &index,
            &self.config.elective_marker,
            &self.config.primary_alternative,
        ) {
            return Some(SkipReason::ElectiveAlternative);
        }
        None
    }

    fn decode_row(&self, grid: &SheetGrid, columns: &ColumnMap, row: usize) -> Result<Discipline> {
        let index = grid
            .cell(row, columns.index)
            .map(ToString::to_string)
            .unwrap_or_default();
        let name = grid
            .cell(row, columns.name)
            .map(|cell| cell.to_string().replace('\n', " "))
            .unwrap_or_default();

        let forms_control = self
            .config
            .control_forms
            .iter()
            .zip(&columns.forms_control)
            .map(|(form, &col)| {
                let count = decode_count(grid, row, col, form)?;
                Ok(ControlFormCount::new(form.clone(), count))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Discipline {
            index,
            name,
            forms_control,
            lecture_hours: decode_count(grid, row, columns.lecture_hours, "lecture_hours")?,
            labs_hours: decode_count(grid, row, columns.labs_hours, "labs_hours")?,
            practice_hours: decode_count(grid, row, columns.practice_hours, "practice_hours")?,
            csr_hours: decode_count(grid, row, columns.csr_hours, "csr_hours")?,
            edu_course_with_semester: decode_semesters(
                grid,
                row,
                &columns.semesters,
                &self.config.courses,
            ),
            code_edu_department: grid.cell(row, columns.department).cloned(),
        })
    }
}

/// Returns true for elective alternatives that must not produce a record.
///
/// An index containing `marker` is kept only when its last dot-separated
/// segment equals `primary` (e.g. `Б1.В.ДВ.01.1` is kept, `Б1.В.ДВ.01.2` is not).
pub fn is_suppressed_elective(index: &str, marker: &str, primary: &str) -> bool {
    if !index.contains(marker) {
        return false;
    }
    let last = index.trim().rsplit('.').next().unwrap_or_default();
    last != primary
}

/// Converts a present cell to a non-negative count.
///
/// Integers pass through, floats are truncated toward zero, text must parse
/// as an integer. Negative values and booleans are rejected, so `-0.5` is an
/// error rather than a truncated 0.
pub fn cell_to_count(cell: &CellValue) -> Option<u32> {
    match cell {
        CellValue::Int(v) => u32::try_from(*v).ok(),
        CellValue::Float(v) => {
            let truncated = v.trunc();
            if v.is_finite() && *v >= 0.0 && truncated <= f64::from(u32::MAX) {
                Some(truncated as u32)
            } else {
                None
            }
        }
        CellValue::Text(s) => s.trim().parse::<u32>().ok(),
        CellValue::Bool(_) => None,
    }
}

fn decode_count(grid: &SheetGrid, row: usize, col: usize, field: &str) -> Result<u32> {
    match grid.cell(row, col) {
        None => Ok(0),
        Some(cell) => cell_to_count(cell).ok_or_else(|| ParseError::InvalidNumber {
            sheet: grid.name().to_string(),
            row: row + 1,
            column: column_letter(col),
            field: field.to_string(),
            value: cell.to_string(),
        }),
    }
}

/// Decodes interleaved first/second semester flag columns.
///
/// Pair `i` belongs to `courses[i]`; any non-blank flag marks activity.
fn decode_semesters(
    grid: &SheetGrid,
    row: usize,
    semester_columns: &[usize],
    courses: &[u8],
) -> Vec<CourseSemester> {
    let mut result = Vec::new();
    for (pair, &course) in semester_columns.chunks(2).zip(courses) {
        for (offset, &col) in pair.iter().enumerate() {
            if grid.cell(row, col).is_some() {
                result.push(CourseSemester::new(course, offset as u8 + 1));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elective_primary_kept() {
        assert!(!is_suppressed_elective("Б1.В.ДВ.01.1", "ДВ", "1"));
        assert!(!is_suppressed_elective("Б1.О.ДВ.05.1", "ДВ", "1"));
    }

    #[test]
    fn test_elective_alternatives_suppressed() {
        assert!(is_suppressed_elective("Б1.В.ДВ.01.2", "ДВ", "1"));
        assert!(is_suppressed_elective("Б1.В.ДВ.01.11", "ДВ", "1"));
    }

    #[test]
    fn test_non_elective_never_suppressed() {
        assert!(!is_suppressed_elective("Б1.О.2", "ДВ", "1"));
        assert!(!is_suppressed_elective("ФТД.1", "ДВ", "1"));
    }

    #[test]
    fn test_elective_index_is_trimmed() {
        assert!(!is_suppressed_elective(" Б1.В.ДВ.01.1 ", "ДВ", "1"));
    }

    #[test]
    fn test_elective_without_dots_uses_whole_index() {
        assert!(is_suppressed_elective("ДВ", "ДВ", "1"));
    }

    #[test]
    fn test_cell_to_count() {
        assert_eq!(cell_to_count(&CellValue::Int(3)), Some(3));
        assert_eq!(cell_to_count(&CellValue::Float(34.0)), Some(34));
        assert_eq!(cell_to_count(&CellValue::Float(2.7)), Some(2));
        assert_eq!(cell_to_count(&CellValue::from(" 74 ")), Some(74));
    }

    #[test]
    fn test_cell_to_count_rejects() {
        assert_eq!(cell_to_count(&CellValue::Int(-1)), None);
        assert_eq!(cell_to_count(&CellValue::Float(-0.5)), None);
        assert_eq!(cell_to_count(&CellValue::Float(f64::NAN)), None);
        assert_eq!(cell_to_count(&CellValue::from("abc")), None);
        assert_eq!(cell_to_count(&CellValue::from("3.5")), None);
        assert_eq!(cell_to_count(&CellValue::Bool(true)), None);
    }

    #[test]
    fn test_decode_semesters() {
        let x = || Some(CellValue::from("x"));
        let grid = SheetGrid::from_rows(
            "Table 2",
            vec![vec![x(), None, None, None, x(), x(), None, x()]],
        );
        let result = decode_semesters(&grid, 0, &[0, 1, 2, 3, 4, 5, 6, 7], &[1, 2, 3, 4]);
        assert_eq!(
            result,
            vec![
                CourseSemester::new(1, 1),
                CourseSemester::new(3, 1),
                CourseSemester::new(3, 2),
                CourseSemester::new(4, 2),
            ]
        );
    }
}
