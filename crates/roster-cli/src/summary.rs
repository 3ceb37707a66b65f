use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportResult;

pub fn print_summary(result: &ImportResult) {
    println!("Template: {} (id {})", result.template.name, result.template.id);
    println!("Event: {}", result.template.event_name);
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template Column"),
        header_cell("Required"),
        header_cell("Source"),
    ]);
    apply_mapping_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for entry in result.mapping.entries() {
        let required = result.template.is_required(&entry.template_column);
        table.add_row(vec![
            Cell::new(&entry.template_column),
            required_cell(required),
            source_cell(result, entry.header.as_deref(), &entry.template_column),
        ]);
    }
    println!("{table}");
    println!(
        "{} rows mapped ({} matched columns, {} defaulted)",
        result.row_count,
        result.mapping.matched_count(),
        result.defaulted_columns
    );
}

fn source_cell(result: &ImportResult, header: Option<&str>, column: &str) -> Cell {
    match header {
        Some(name) => Cell::new(name).fg(Color::Green),
        None if result.defaults.has_non_empty(column) => {
            Cell::new("default").fg(Color::Yellow)
        }
        None => dim_cell("(empty)"),
    }
}

fn required_cell(required: bool) -> Cell {
    if required {
        Cell::new("✓")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_mapping_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
