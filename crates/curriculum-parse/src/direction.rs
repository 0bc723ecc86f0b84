//! Study direction extraction from free-text descriptions.

use std::sync::LazyLock;

use curriculum_ingest::SheetGrid;
use curriculum_model::StudyDirection;
use regex::Regex;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Направление\s+(\d{2}\.\d{2}\.\d{2})"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)Направление\s+\d{2}\.\d{2}\.\d{2}\s*"([^"]+)""#));
static PROFILE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)Направленность\s*\(профиль\):\s*"([^"]+)""#));
static DEPARTMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Кафедра:\s*(.+?)(?:\s*$|\.|,)"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("direction pattern is valid")
}

/// Parses a direction description such as
/// `Направление 09.03.02 "..." Направленность (профиль): "..." Кафедра: ...`.
///
/// The four fields are searched independently; a clause that is not found
/// leaves its field empty. This never fails.
pub fn parse_study_direction(text: &str) -> StudyDirection {
    let direction = StudyDirection {
        code: capture(&CODE_RE, text),
        name: capture(&NAME_RE, text),
        profile: capture(&PROFILE_RE, text),
        edu_department: capture(&DEPARTMENT_RE, text),
    };
    if direction.is_empty() {
        tracing::warn!("direction description matched no known clause");
    }
    direction
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Joins the non-blank cells of a direction sheet into one description.
///
/// Cells are visited row by row and separated by single spaces.
pub fn direction_text_from_sheet(grid: &SheetGrid) -> String {
    grid.text_cells()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
