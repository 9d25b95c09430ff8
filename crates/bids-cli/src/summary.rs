use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bids_model::ValidationIssue;

use crate::types::ValidationOutcome;

pub fn print_summary(outcome: &ValidationOutcome) {
    if let Some(subjects) = outcome.subjects {
        println!("Subjects validated: {subjects}");
    }
    if let Some(path) = &outcome.issues_tsv {
        println!("Issue table: {}", path.display());
    }
    if let Some(path) = &outcome.data_dictionary {
        println!("Data dictionary: {}", path.display());
    }

    let errors = outcome.table.error_count();
    let warnings = outcome.table.warning_count();
    println!(
        "Issues: {} ({errors} error(s), {warnings} warning(s))",
        outcome.table.len()
    );

    print_issue_table(&outcome.table.rows);
}

fn print_issue_table(rows: &[ValidationIssue]) {
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Location"),
        header_cell("Affects"),
        header_cell("Rule"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);

    for row in rows {
        table.add_row(vec![
            severity_cell(&row.severity),
            Cell::new(&row.code),
            text_cell(&row.location),
            text_cell(&row.affects),
            text_cell(&row.rule),
        ]);
    }

    println!();
    println!("{table}");
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Fixed(28)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: &str) -> Cell {
    match severity {
        "error" => Cell::new("ERROR").fg(Color::Red),
        "warning" => Cell::new("WARN").fg(Color::Yellow),
        other => Cell::new(other).fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
