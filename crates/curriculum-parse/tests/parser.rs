//! End-to-end tests: `.xlsx` workbook in, curriculum out.

mod common;

use std::fmt::Write as _;

use common::{PlanRow, SAMPLE_DIRECTION, write_plan_xlsx};
use curriculum_ingest::{IngestError, SheetGrid, Workbook};
use curriculum_model::{CellValue, Curriculum};
use curriculum_parse::{
    ConfigError, CurriculumParser, DirectionSource, ParseError, TemplateConfig,
};
use tempfile::TempDir;

fn sample_rows() -> Vec<PlanRow> {
    let mut philosophy = PlanRow::new("Б1.О.1", "Философия");
    philosophy.forms[0] = Some(1);
    philosophy.hours = [Some(34), None, Some(17), Some(57)];
    philosophy.semesters[1] = true;
    philosophy.department = Some(CellValue::Float(3.0));

    let mut databases = PlanRow::new("Б1.В.ДВ.01.1", "Базы\nданных");
    databases.forms[2] = Some(1);
    databases.forms[4] = Some(1);
    databases.hours = [Some(32), Some(32), None, Some(80)];
    databases.semesters[4] = true;
    databases.semesters[5] = true;
    databases.department = Some(CellValue::Float(7.0));

    let warehouses = PlanRow::new("Б1.В.ДВ.01.2", "Хранилища данных");

    vec![
        PlanRow::blank_index("Блок 1. Дисциплины (модули)"),
        philosophy,
        databases,
        warehouses,
    ]
}

fn render(curriculum: &Curriculum) -> String {
    let mut out = String::new();
    let direction = &curriculum.direction;
    writeln!(
        out,
        "{} | {} | {} | {}",
        direction.code.as_deref().unwrap_or("-"),
        direction.name.as_deref().unwrap_or("-"),
        direction.profile.as_deref().unwrap_or("-"),
        direction.edu_department.as_deref().unwrap_or("-"),
    )
    .unwrap();
    for d in &curriculum.disciplines {
        let forms: Vec<String> = d.forms_control.iter().map(|f| f.count.to_string()).collect();
        let semesters: Vec<String> = d
            .edu_course_with_semester
            .iter()
            .map(|cs| format!("{}/{}", cs.course, cs.semester))
            .collect();
        writeln!(
            out,
            "{} | {} | {} | {}/{}/{}/{} | {} | {}",
            d.index,
            d.name,
            forms.join(","),
            d.lecture_hours,
            d.labs_hours,
            d.practice_hours,
            d.csr_hours,
            semesters.join(" "),
            d.code_edu_department
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        )
        .unwrap();
    }
    out
}

#[test]
fn test_parse_workbook_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.xlsx");
    write_plan_xlsx(&path, &["Учебный план"], &sample_rows());

    let parser = CurriculumParser::open(
        &path,
        DirectionSource::Text(SAMPLE_DIRECTION.to_string()),
        TemplateConfig::default(),
    )
    .unwrap();
    let curriculum = parser.parse().unwrap();

    insta::assert_snapshot!(render(&curriculum), @r"
    09.03.02 | Информационные системы и технологии | Распределенные информационные системы | Компьютерные технологии в проектировании и производстве
    Б1.О.1 | Философия | 1,0,0,0,0,0,0 | 34/0/17/57 | 1/2 | 3
    Б1.В.ДВ.01.1 | Базы данных | 0,0,1,0,1,0,0 | 32/32/0/80 | 3/1 3/2 | 7
    ");
}

#[test]
fn test_parse_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.xlsx");
    write_plan_xlsx(&path, &["Учебный план"], &sample_rows());

    let parser = CurriculumParser::open(
        &path,
        DirectionSource::Text(SAMPLE_DIRECTION.to_string()),
        TemplateConfig::default(),
    )
    .unwrap();

    assert_eq!(parser.parse().unwrap(), parser.parse().unwrap());
}

#[test]
fn test_direction_from_sheet_is_opt_in() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.xlsx");
    write_plan_xlsx(
        &path,
        &[
            "Направление 01.03.02 \"Прикладная математика и информатика\"",
            "Кафедра: Высшая математика",
        ],
        &[],
    );

    let from_text = CurriculumParser::open(
        &path,
        DirectionSource::Text(String::new()),
        TemplateConfig::default(),
    )
    .unwrap()
    .parse()
    .unwrap();
    assert!(from_text.direction.is_empty());
    assert!(from_text.disciplines.is_empty());

    let from_sheet =
        CurriculumParser::open(&path, DirectionSource::Sheet, TemplateConfig::default())
            .unwrap()
            .parse()
            .unwrap();
    assert_eq!(from_sheet.direction.code.as_deref(), Some("01.03.02"));
    assert_eq!(
        from_sheet.direction.edu_department.as_deref(),
        Some("Высшая математика")
    );
}

#[test]
fn test_missing_discipline_sheet_is_fatal() {
    let config = TemplateConfig {
        discipline_sheet: "План".to_string(),
        ..TemplateConfig::default()
    };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.xlsx");
    write_plan_xlsx(&path, &[], &[]);

    let err = CurriculumParser::open(&path, DirectionSource::Sheet, config).unwrap_err();

    assert!(matches!(
        err,
        ParseError::Ingest(IngestError::SheetNotFound { ref sheet, .. }) if sheet == "План"
    ));
}

#[test]
fn test_in_memory_source() {
    let workbook = Workbook::from_grids(vec![
        SheetGrid::empty("Table 1"),
        common::plan_grid(&sample_rows()),
    ]);
    let parser = CurriculumParser::new(
        workbook,
        DirectionSource::Text(SAMPLE_DIRECTION.to_string()),
        TemplateConfig::default(),
    );

    let curriculum = parser.parse().unwrap();

    assert_eq!(curriculum.disciplines.len(), 2);
    assert_eq!(curriculum.total_hours(), 34 + 17 + 57 + 32 + 32 + 80);
}

#[test]
fn test_template_loaded_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.toml");
    std::fs::write(
        &path,
        r#"
discipline_sheet = "План"
courses = [1, 2]

[layout]
index = { header = "Индекс" }
name = { header = "Наименование" }
forms_control = [
    { header = "Формы контроля" },
    { position = 3 },
    { position = 4 },
    { position = 5 },
    { position = 6 },
    { position = 7 },
    { position = 8 },
]
lecture_hours = { position = 12 }
labs_hours = { position = 13 }
practice_hours = { position = 14 }
csr_hours = { position = 15 }
semesters = [{ position = 21 }, { position = 22 }, { position = 24 }, { position = 25 }]
department = { header = "Закрепленная" }
"#,
    )
    .unwrap();

    let config = TemplateConfig::load(&path).unwrap();

    assert_eq!(config.discipline_sheet, "План");
    assert_eq!(config.direction_sheet, "Table 1");
    assert_eq!(config.courses, vec![1, 2]);
    assert_eq!(config.layout.semesters.len(), 4);
}

#[test]
fn test_inconsistent_template_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.toml");
    std::fs::write(&path, "courses = [1, 2, 3, 4, 5]\n").unwrap();

    let err = TemplateConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_template_syntax_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.toml");
    std::fs::write(&path, "header_row = \"first\"\n").unwrap();

    let err = TemplateConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Toml { .. }));
}
