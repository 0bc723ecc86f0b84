//! Extraction entry point.

use std::path::Path;

use curriculum_ingest::{SheetSource, Workbook};
use curriculum_model::{Curriculum, Discipline, StudyDirection};

use crate::config::TemplateConfig;
use crate::direction::{direction_text_from_sheet, parse_study_direction};
use crate::discipline::DisciplineExtractor;
use crate::error::Result;

/// Where the direction description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionSource {
    /// Caller-supplied description text.
    Text(String),
    /// Text cells of the direction sheet.
    Sheet,
}

/// Runs both extractors against one loaded study plan.
#[derive(Debug, Clone)]
pub struct CurriculumParser<S = Workbook> {
    source: S,
    direction: DirectionSource,
    config: TemplateConfig,
}

impl CurriculumParser<Workbook> {
    /// Loads the direction and discipline sheets of `path` once.
    pub fn open(path: &Path, direction: DirectionSource, config: TemplateConfig) -> Result<Self> {
        config.validate()?;
        let workbook = Workbook::open(
            path,
            &[
                config.direction_sheet.as_str(),
                config.discipline_sheet.as_str(),
            ],
        )?;
        Ok(Self::new(workbook, direction, config))
    }
}

impl<S: SheetSource> CurriculumParser<S> {
    /// Wraps an already loaded sheet source.
    pub fn new(source: S, direction: DirectionSource, config: TemplateConfig) -> Self {
        Self {
            source,
            direction,
            config,
        }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Runs both extractors and returns the direction with its disciplines.
    pub fn parse(&self) -> Result<Curriculum> {
        let span = tracing::info_span!("parse_curriculum");
        let _guard = span.enter();
        let direction = self.parse_study_direction()?;
        let disciplines = self.parse_disciplines()?;
        Ok(Curriculum::new(direction, disciplines))
    }

    /// Extracts the study direction from the configured source.
    pub fn parse_study_direction(&self) -> Result<StudyDirection> {
        let direction = match &self.direction {
            DirectionSource::Text(text) => parse_study_direction(text.trim()),
            DirectionSource::Sheet => {
                let grid = self.source.sheet(&self.config.direction_sheet)?;
                parse_study_direction(&direction_text_from_sheet(grid))
            }
        };
        tracing::info!(
            code = direction.code.as_deref().unwrap_or("-"),
            "parsed study direction"
        );
        Ok(direction)
    }

    /// Extracts the disciplines from the discipline sheet.
    pub fn parse_disciplines(&self) -> Result<Vec<Discipline>> {
        let grid = self.source.sheet(&self.config.discipline_sheet)?;
        DisciplineExtractor::new(&self.config).extract(grid)
    }
}
