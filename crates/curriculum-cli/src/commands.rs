use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use curriculum_model::Curriculum;
use curriculum_parse::{CurriculumParser, DirectionSource, TemplateConfig};

use crate::cli::{Cli, OutputFormatArg};
use crate::summary::render_curriculum;

/// Loads the workbook named on the command line and extracts the curriculum.
pub fn run_extract(cli: &Cli) -> Result<Curriculum> {
    let span = info_span!("extract", file = %cli.file.display());
    let _guard = span.enter();

    let config = match &cli.template {
        Some(path) => TemplateConfig::load(path)
            .with_context(|| format!("load template {}", path.display()))?,
        None => TemplateConfig::default(),
    };
    let direction = if cli.direction_from_sheet {
        DirectionSource::Sheet
    } else {
        DirectionSource::Text(cli.study_direction.clone())
    };

    let start = Instant::now();
    let parser = CurriculumParser::open(&cli.file, direction, config)
        .with_context(|| format!("open study plan {}", cli.file.display()))?;
    let curriculum = parser
        .parse()
        .with_context(|| format!("parse study plan {}", cli.file.display()))?;
    info!(
        disciplines = curriculum.disciplines.len(),
        duration_ms = start.elapsed().as_millis(),
        "extraction complete"
    );
    Ok(curriculum)
}

/// Formats the curriculum and writes it to `--output` or stdout.
pub fn write_output(cli: &Cli, curriculum: &Curriculum) -> Result<()> {
    let rendered = match cli.format {
        OutputFormatArg::Json => {
            let mut json =
                serde_json::to_string_pretty(curriculum).context("serialize curriculum")?;
            json.push('\n');
            json
        }
        OutputFormatArg::Table => {
            let styled = cli.output.is_none() && io::stdout().is_terminal();
            render_curriculum(curriculum, styled)
        }
    };
    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("write output {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
