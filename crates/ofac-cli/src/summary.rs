use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ofac_transform::TransformStats;

pub fn print_summary(stats: &TransformStats, output: &Path) {
    println!("Output: {}", output.display());
    println!("SHA-256: {}", stats.output_sha256);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Parties processed"), Cell::new(stats.processed)]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.emitted).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Parties skipped"),
        count_cell(stats.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Repeated record ids"),
        count_cell(stats.repeated_ids, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Features"), Cell::new(stats.features)]);
    table.add_row(vec![Cell::new("Relationships"), Cell::new(stats.relationships)]);
    table.add_row(vec![Cell::new("Identifiers"), Cell::new(stats.identifiers)]);
    table.add_row(vec![
        Cell::new("Unmapped feature types"),
        count_cell(stats.unmapped_feature_codes.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmapped document types"),
        count_cell(stats.unmapped_document_codes.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("Elapsed"),
        dim_cell(format!("{:.2?}", stats.duration)),
    ]);
    println!("{table}");
    print_unmapped_table(stats);
}

fn print_unmapped_table(stats: &TransformStats) {
    if stats.unmapped_feature_codes.is_empty() && stats.unmapped_document_codes.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Codes")]);
    apply_summary_table_style(&mut table);
    for (kind, codes) in [
        ("Feature type", &stats.unmapped_feature_codes),
        ("Document type", &stats.unmapped_document_codes),
    ] {
        if codes.is_empty() {
            continue;
        }
        let joined = codes
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![Cell::new(kind), Cell::new(joined).fg(Color::Yellow)]);
    }
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
