//! Discipline records.

use serde::{Deserialize, Serialize};

use crate::CellValue;

/// Count of one control form (exam, pass/fail test, ...) for a discipline.
///
/// A count of 0 means the discipline is not assessed this way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFormCount {
    pub form: String,
    pub count: u32,
}

impl ControlFormCount {
    pub fn new(form: impl Into<String>, count: u32) -> Self {
        Self {
            form: form.into(),
            count,
        }
    }
}

/// A course/semester combination in which a discipline is taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseSemester {
    pub course: u8,
    /// Semester within the course: 1 or 2.
    pub semester: u8,
}

impl CourseSemester {
    pub const fn new(course: u8, semester: u8) -> Self {
        Self { course, semester }
    }
}

/// One row of the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    /// Hierarchical identifier such as `Б1.О.1`; not checked for uniqueness.
    pub index: String,
    pub name: String,
    /// One entry per known control form, in canonical order.
    pub forms_control: Vec<ControlFormCount>,
    pub lecture_hours: u32,
    pub labs_hours: u32,
    pub practice_hours: u32,
    /// Self-study hours.
    pub csr_hours: u32,
    pub edu_course_with_semester: Vec<CourseSemester>,
    /// Department code exactly as found in the source cell.
    pub code_edu_department: Option<CellValue>,
}

impl Discipline {
    /// Lecture, lab and practice hours combined.
    pub fn contact_hours(&self) -> u64 {
        u64::from(self.lecture_hours) + u64::from(self.labs_hours) + u64::from(self.practice_hours)
    }
}
