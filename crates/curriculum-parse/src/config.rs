//! Study plan template configuration.
//!
//! A template describes where things live in one family of study plan
//! spreadsheets: sheet names, the header row, which columns hold which
//! discipline fields, and the canonical control form and course lists.
//! [`TemplateConfig::default`] describes the standard two-sheet template.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical control form names, in column order.
pub const DEFAULT_CONTROL_FORMS: [&str; 7] = [
    "Экзамены",
    "Зачеты",
    "Зачеты с оценкой",
    "Курсовые проекты",
    "Курсовые работы",
    "Контрольные",
    "РГР",
];

/// Course numbers covered by the semester flag columns.
pub const DEFAULT_COURSES: [u8; 4] = [1, 2, 3, 4];

/// How a column is located in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelector {
    /// Column whose trimmed header text equals the given name.
    Header(String),
    /// Column at a fixed 0-based position whose header cell is blank.
    Position(usize),
}

impl ColumnSelector {
    pub fn header(name: impl Into<String>) -> Self {
        Self::Header(name.into())
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(name) => write!(f, "'{name}'"),
            Self::Position(index) => write!(f, "unnamed column {}", column_letter(*index)),
        }
    }
}

/// Spreadsheet column letter for a 0-based column index (0 -> A, 26 -> AA).
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Column selectors for the discipline sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineLayout {
    pub index: ColumnSelector,
    pub name: ColumnSelector,
    /// One column per control form, in canonical order.
    pub forms_control: Vec<ColumnSelector>,
    pub lecture_hours: ColumnSelector,
    pub labs_hours: ColumnSelector,
    pub practice_hours: ColumnSelector,
    pub csr_hours: ColumnSelector,
    /// First/second semester flag columns, interleaved per course.
    pub semesters: Vec<ColumnSelector>,
    pub department: ColumnSelector,
}

impl DisciplineLayout {
    /// All selectors in positional order: index, name, control forms, hours,
    /// semester flags, department.
    pub fn selectors(&self) -> Vec<&ColumnSelector> {
        let mut selectors = vec![&self.index, &self.name];
        selectors.extend(&self.forms_control);
        selectors.extend([
            &self.lecture_hours,
            &self.labs_hours,
            &self.practice_hours,
            &self.csr_hours,
        ]);
        selectors.extend(&self.semesters);
        selectors.push(&self.department);
        selectors
    }
}

impl Default for DisciplineLayout {
    fn default() -> Self {
        let mut forms_control = vec![ColumnSelector::header("Формы контроля")];
        forms_control.extend((3..=8).map(ColumnSelector::Position));
        Self {
            index: ColumnSelector::header("Индекс"),
            name: ColumnSelector::header("Наименование"),
            forms_control,
            lecture_hours: ColumnSelector::Position(12),
            labs_hours: ColumnSelector::Position(13),
            practice_hours: ColumnSelector::Position(14),
            csr_hours: ColumnSelector::Position(15),
            semesters: [21, 22, 24, 25, 27, 28, 30, 31]
                .into_iter()
                .map(ColumnSelector::Position)
                .collect(),
            department: ColumnSelector::header("Закрепленная"),
        }
    }
}

/// Full description of a study plan template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Sheet holding the direction description.
    pub direction_sheet: String,
    /// Sheet holding the discipline table.
    pub discipline_sheet: String,
    /// 0-based row where the header search starts. Blank rows are skipped;
    /// data starts on the row after the header.
    pub header_row: usize,
    pub layout: DisciplineLayout,
    pub control_forms: Vec<String>,
    pub courses: Vec<u8>,
    /// Index substring marking an elective group.
    pub elective_marker: String,
    /// Last index segment of the elective alternative that is kept.
    pub primary_alternative: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            direction_sheet: "Table 1".to_string(),
            discipline_sheet: "Table 2".to_string(),
            header_row: 0,
            layout: DisciplineLayout::default(),
            control_forms: DEFAULT_CONTROL_FORMS.map(String::from).to_vec(),
            courses: DEFAULT_COURSES.to_vec(),
            elective_marker: "ДВ".to_string(),
            primary_alternative: "1".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Loads a template from a TOML file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded template configuration");
        Ok(config)
    }

    /// Checks that the layout agrees with the control form and course lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.forms_control.len() != self.control_forms.len() {
            return Err(ConfigError::Invalid {
                message: format!(
                    "{} control form columns for {} control forms",
                    self.layout.forms_control.len(),
                    self.control_forms.len()
                ),
            });
        }
        if self.layout.semesters.len() != self.courses.len() * 2 {
            return Err(ConfigError::Invalid {
                message: format!(
                    "{} semester columns for {} courses (expected two per course)",
                    self.layout.semesters.len(),
                    self.courses.len()
                ),
            });
        }
        if self.elective_marker.is_empty() {
            return Err(ConfigError::Invalid {
                message: "elective marker must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
