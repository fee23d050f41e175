use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_model::RecordKind;
use osm_output::file_name;

use crate::types::{AuditResult, ProcessResult};

pub fn print_process_summary(result: &ProcessResult) {
    let summary = &result.summary;
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!(
        "Elements: {} ({} nodes, {} ways)",
        summary.elements(),
        summary.nodes,
        summary.ways
    );
    if !result.validated {
        println!("Validation: skipped");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stream"),
        header_cell("File"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    for kind in RecordKind::ALL {
        let rows = *summary.rows.get(kind);
        total_rows += rows;
        table.add_row(vec![
            Cell::new(kind.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file_name(kind)),
            count_cell(rows, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_dropped_table(result);
}

fn print_dropped_table(result: &ProcessResult) {
    let dropped = &result.summary.dropped;
    if dropped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dropped key"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, count) in dropped {
        table.add_row(vec![
            Cell::new(key),
            count_cell(*count, Color::Yellow),
        ]);
    }
    println!();
    println!("Dropped tags:");
    println!("{table}");
}

pub fn print_audit(result: &AuditResult) {
    println!("Input: {}", result.input.display());
    if result.audit.is_empty() {
        println!("No unexpected street types.");
        return;
    }
    println!("Unexpected street types: {}", result.audit.len());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Street type"),
        header_cell("Name"),
        header_cell("Suggested"),
    ]);
    apply_summary_table_style(&mut table);
    let mut previous: Option<&str> = None;
    for rewrite in &result.rewrites {
        let type_cell = if previous == Some(rewrite.street_type.as_str()) {
            dim_cell("")
        } else {
            Cell::new(&rewrite.street_type)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        previous = Some(rewrite.street_type.as_str());
        let suggested = if rewrite.changes() {
            Cell::new(&rewrite.normalized).fg(Color::Green)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![type_cell, Cell::new(&rewrite.original), suggested]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
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
