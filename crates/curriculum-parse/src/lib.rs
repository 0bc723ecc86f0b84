//! Study plan extraction.
//!
//! Turns a loaded two-sheet study plan into a [`Curriculum`]:
//!
//! - [`parse_study_direction`]: regex scan of a direction description
//! - [`DisciplineExtractor`]: decoding of the discipline table
//! - [`CurriculumParser`]: loads a workbook once and runs both
//!
//! Sheet layout (sheet names, header row, column selectors, control forms,
//! courses) comes from a [`TemplateConfig`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use curriculum_parse::{CurriculumParser, DirectionSource, TemplateConfig};
//!
//! let parser = CurriculumParser::open(
//!     Path::new("plan.xlsx"),
//!     DirectionSource::Text("Направление 09.03.02 ...".to_string()),
//!     TemplateConfig::default(),
//! )?;
//! let curriculum = parser.parse()?;
//! ```
//!
//! [`Curriculum`]: curriculum_model::Curriculum

mod columns;
mod config;
mod direction;
mod discipline;
mod error;
mod parser;

// === Error Types ===
pub use error::{ConfigError, ParseError, Result};

// === Configuration ===
pub use config::{
    ColumnSelector, DEFAULT_CONTROL_FORMS, DEFAULT_COURSES, DisciplineLayout, TemplateConfig,
    column_letter,
};

// === Extraction ===
pub use columns::ColumnMap;
pub use direction::{direction_text_from_sheet, parse_study_direction};
pub use discipline::{DisciplineExtractor, SkipReason, cell_to_count, is_suppressed_elective};
pub use parser::{CurriculumParser, DirectionSource};
