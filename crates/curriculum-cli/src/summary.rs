use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use curriculum_model::{Curriculum, Discipline, StudyDirection};

/// Renders the direction block followed by the discipline table.
///
/// With `styled == false` no ANSI styling is emitted (file output).
pub fn render_curriculum(curriculum: &Curriculum, styled: bool) -> String {
    let direction = direction_table(&curriculum.direction, styled);
    let disciplines = discipline_table(&curriculum.disciplines, styled);
    format!("{direction}\n{disciplines}\n")
}

fn direction_table(direction: &StudyDirection, styled: bool) -> Table {
    let mut table = Table::new();
    if !styled {
        table.force_no_tty();
    }
    table.set_header(vec![header_cell("Direction"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (label, value) in [
        ("Code", &direction.code),
        ("Name", &direction.name),
        ("Profile", &direction.profile),
        ("Department", &direction.edu_department),
    ] {
        let value_cell = match value {
            Some(text) => Cell::new(text),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(label), value_cell]);
    }
    table
}

fn discipline_table(disciplines: &[Discipline], styled: bool) -> Table {
    let mut table = Table::new();
    if !styled {
        table.force_no_tty();
    }
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Name"),
        header_cell("Control"),
        header_cell("Lec"),
        header_cell("Lab"),
        header_cell("Pr"),
        header_cell("CSR"),
        header_cell("Semesters"),
        header_cell("Dept"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 3..=6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    align_column(&mut table, 8, CellAlignment::Center);

    let mut totals = [0u64; 4];
    for discipline in disciplines {
        let hours = [
            discipline.lecture_hours,
            discipline.labs_hours,
            discipline.practice_hours,
            discipline.csr_hours,
        ];
        for (total, value) in totals.iter_mut().zip(hours) {
            *total += u64::from(value);
        }
        let mut row = vec![
            Cell::new(&discipline.index)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&discipline.name),
            control_cell(discipline),
        ];
        row.extend(hours.into_iter().map(hours_cell));
        row.push(semesters_cell(discipline));
        row.push(match &discipline.code_edu_department {
            Some(code) => Cell::new(code),
            None => dim_cell("-"),
        });
        table.add_row(row);
    }

    let mut total_row = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} disciplines", disciplines.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ];
    total_row.extend(
        totals
            .into_iter()
            .map(|total| Cell::new(total).add_attribute(Attribute::Bold)),
    );
    total_row.extend([dim_cell("-"), dim_cell("-")]);
    table.add_row(total_row);
    table
}

/// Non-zero control forms as `name×count`, one per line.
fn control_label(discipline: &Discipline) -> String {
    discipline
        .forms_control
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| {
            if entry.count == 1 {
                entry.form.clone()
            } else {
                format!("{}×{}", entry.form, entry.count)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn control_cell(discipline: &Discipline) -> Cell {
    let label = control_label(discipline);
    if label.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(label)
    }
}

/// Course/semester pairs as `course.semester`, space separated.
fn semesters_label(discipline: &Discipline) -> String {
    discipline
        .edu_course_with_semester
        .iter()
        .map(|cs| format!("{}.{}", cs.course, cs.semester))
        .collect::<Vec<_>>()
        .join(" ")
}

fn semesters_cell(discipline: &Discipline) -> Cell {
    let label = semesters_label(discipline);
    if label.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(label)
    }
}

fn hours_cell(value: u32) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 9 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
