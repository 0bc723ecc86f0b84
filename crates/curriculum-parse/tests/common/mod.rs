//! Shared fixtures: study plan rows laid out per the default template.
#![allow(dead_code)]

use std::path::Path;

use curriculum_ingest::SheetGrid;
use curriculum_model::CellValue;

pub const FORM_COLUMNS: [usize; 7] = [2, 3, 4, 5, 6, 7, 8];
pub const HOUR_COLUMNS: [usize; 4] = [12, 13, 14, 15];
pub const SEMESTER_COLUMNS: [usize; 8] = [21, 22, 24, 25, 27, 28, 30, 31];
pub const DEPARTMENT_COLUMN: usize = 32;
pub const PLAN_WIDTH: usize = 33;

pub const SAMPLE_DIRECTION: &str = "Направление 09.03.02 \"Информационные системы и технологии\" \
    Направленность (профиль): \"Распределенные информационные системы\" \
    Кафедра: Компьютерные технологии в проектировании и производстве";

/// Header row of the discipline sheet, with labels on the ignored columns.
pub fn header_cells() -> Vec<Option<CellValue>> {
    let mut cells = vec![None; PLAN_WIDTH];
    for (col, label) in [
        (0, "Индекс"),
        (1, "Наименование"),
        (2, "Формы контроля"),
        (9, "з.е."),
        (10, "Итого акад.часов"),
        (16, "Контроль"),
        (20, "Курс 1"),
        (23, "Курс 2"),
        (26, "Курс 3"),
        (29, "Курс 4"),
        (DEPARTMENT_COLUMN, "Закрепленная"),
    ] {
        cells[col] = Some(CellValue::from(label));
    }
    cells
}

/// One discipline sheet row.
#[derive(Debug, Clone, Default)]
pub struct PlanRow {
    pub index: Option<String>,
    pub name: Option<String>,
    pub forms: [Option<u32>; 7],
    /// Lecture, labs, practice, self-study.
    pub hours: [Option<u32>; 4],
    pub semesters: [bool; 8],
    pub department: Option<CellValue>,
}

impl PlanRow {
    pub fn new(index: &str, name: &str) -> Self {
        Self {
            index: Some(index.to_string()),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn blank_index(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn cells(&self) -> Vec<Option<CellValue>> {
        let mut cells = vec![None; PLAN_WIDTH];
        cells[0] = self.index.clone().map(CellValue::Text);
        cells[1] = self.name.clone().map(CellValue::Text);
        for (col, value) in FORM_COLUMNS.iter().zip(self.forms) {
            cells[*col] = value.map(|v| CellValue::Float(f64::from(v)));
        }
        for (col, value) in HOUR_COLUMNS.iter().zip(self.hours) {
            cells[*col] = value.map(|v| CellValue::Float(f64::from(v)));
        }
        for (col, active) in SEMESTER_COLUMNS.iter().zip(self.semesters) {
            if active {
                cells[*col] = Some(CellValue::from("+"));
            }
        }
        cells[DEPARTMENT_COLUMN] = self.department.clone();
        cells
    }
}

/// Builds the discipline sheet grid: header row followed by `rows`.
pub fn plan_grid(rows: &[PlanRow]) -> SheetGrid {
    let mut data = vec![header_cells()];
    data.extend(rows.iter().map(PlanRow::cells));
    SheetGrid::from_rows("Table 2", data)
}

fn write_cell(sheet: &mut rust_xlsxwriter::Worksheet, row: u32, col: u16, cell: &CellValue) {
    let written = match cell {
        CellValue::Text(s) => sheet.write_string(row, col, s.as_str()).map(|_| ()),
        CellValue::Int(v) => sheet.write_number(row, col, *v as f64).map(|_| ()),
        CellValue::Float(v) => sheet.write_number(row, col, *v).map(|_| ()),
        CellValue::Bool(v) => sheet.write_boolean(row, col, *v).map(|_| ()),
    };
    written.unwrap();
}

fn write_rows(sheet: &mut rust_xlsxwriter::Worksheet, rows: &[Vec<Option<CellValue>>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(cell) = cell {
                write_cell(sheet, r as u32, c as u16, cell);
            }
        }
    }
}

/// Writes a two-sheet study plan workbook.
pub fn write_plan_xlsx(path: &Path, title_lines: &[&str], rows: &[PlanRow]) {
    let mut book = rust_xlsxwriter::Workbook::new();

    let title = book.add_worksheet();
    title.set_name("Table 1").unwrap();
    for (r, line) in title_lines.iter().enumerate() {
        title.write_string(r as u32, 0, *line).unwrap();
    }

    let plan = book.add_worksheet();
    plan.set_name("Table 2").unwrap();
    let mut data = vec![header_cells()];
    data.extend(rows.iter().map(PlanRow::cells));
    write_rows(plan, &data);

    book.save(path).unwrap();
}
