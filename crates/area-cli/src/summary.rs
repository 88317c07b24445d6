use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use area_model::{DropdownLevel, IndexIssue, IssueSeverity, SelectionPath};

use crate::types::{CheckOutcome, LevelsOutcome, PathOutcome};

pub fn print_check(outcome: &CheckOutcome) {
    println!("Tenant: {}", outcome.tenant);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Nodes"),
        header_cell("Types"),
        header_cell("Roots"),
        header_cell("Depth"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.nodes),
        Cell::new(outcome.types),
        Cell::new(outcome.roots),
        Cell::new(outcome.max_depth),
        count_cell(outcome.report.error_count(), Color::Red),
        count_cell(outcome.report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");
    print_issue_table(&outcome.report.issues);
    if let Some(error) = &outcome.fatal {
        eprintln!("Fatal: {error}");
    }
}

fn print_issue_table(issues: &[IndexIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut ordered: Vec<&IndexIssue> = issues.iter().collect();
    ordered.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let kind = a.kind.cmp(&b.kind);
        if kind != Ordering::Equal {
            return kind;
        }
        a.code.cmp(&b.code)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in ordered {
        let code = match &issue.code {
            Some(code) => Cell::new(code).fg(Color::Blue),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.kind),
            code,
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
}

pub fn print_levels(outcome: &LevelsOutcome, prefer_local: bool) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Depth"),
        header_cell("Type"),
        header_cell("Selected"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for level in &outcome.levels {
        table.add_row(vec![
            Cell::new(level.depth),
            type_cell(&level.type_name),
            selected_cell(level, outcome),
            Cell::new(option_list(level, prefer_local)),
        ]);
    }
    println!("{table}");
    print_breadcrumb(&outcome.path);
    match &outcome.leaf {
        Some(leaf) => println!("Leaf: {leaf}"),
        None => println!("Leaf: -"),
    }
}

pub fn print_path(outcome: &PathOutcome) {
    if outcome.selections.is_empty() {
        println!("No stored leaf; selection starts empty.");
        return;
    }
    print_breadcrumb(&outcome.path);
}

fn print_breadcrumb(path: &SelectionPath) {
    if path.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Code"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    for entry in path {
        table.add_row(vec![
            type_cell(&entry.type_name),
            Cell::new(&entry.area_code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.area_name),
        ]);
    }
    println!("{table}");
}

fn option_list(level: &DropdownLevel, prefer_local: bool) -> String {
    level
        .options
        .iter()
        .map(|node| format!("{} ({})", node.code, node.display_name(prefer_local)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn selected_cell(level: &DropdownLevel, outcome: &LevelsOutcome) -> Cell {
    match &level.selected_code {
        Some(code) if outcome.auto_selected.contains(code) => {
            Cell::new(format!("{code} (auto)")).fg(Color::Green)
        }
        Some(code) => Cell::new(code).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn type_cell(name: &str) -> Cell {
    if name.is_empty() {
        dim_cell("?")
    } else {
        Cell::new(name)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 2,
        IssueSeverity::Warning => 1,
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
