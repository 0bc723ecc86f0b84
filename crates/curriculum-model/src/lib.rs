//! Curriculum data model.
//!
//! Value types produced by a single extraction pass over a study plan
//! spreadsheet:
//!
//! - [`StudyDirection`]: program-level metadata (code, name, profile, department)
//! - [`Discipline`]: one curriculum row with hours, control forms and schedule
//! - [`CellValue`]: a present spreadsheet cell; blank cells are `None`
//! - [`Curriculum`]: the direction together with its disciplines

pub mod cell;
pub mod direction;
pub mod discipline;

pub use cell::CellValue;
pub use direction::StudyDirection;
pub use discipline::{ControlFormCount, CourseSemester, Discipline};

use serde::{Deserialize, Serialize};

/// Result of one extraction run: the direction and its disciplines in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    pub direction: StudyDirection,
    pub disciplines: Vec<Discipline>,
}

impl Curriculum {
    pub fn new(direction: StudyDirection, disciplines: Vec<Discipline>) -> Self {
        Self {
            direction,
            disciplines,
        }
    }

    /// Sum of lecture, lab, practice and self-study hours across all disciplines.
    pub fn total_hours(&self) -> u64 {
        self.disciplines
            .iter()
            .map(|d| d.contact_hours() + u64::from(d.csr_hours))
            .sum()
    }
}
