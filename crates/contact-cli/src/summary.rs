use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contact_normalization::SkippedRecord;

use crate::types::{CheckOutcome, NormalizeResult};

pub fn print_summary(result: &NormalizeResult) {
    println!("Input: {}", result.input.display());
    match (&result.output_path, result.dry_run) {
        (Some(path), _) => println!("Output: {}", path.display()),
        (None, true) => println!("Output: (dry run, not written)"),
        (None, false) => println!("Output: (no rows normalized, not written)"),
    }
    println!("{}", summary_table(result));

    if !result.output.skipped.is_empty() {
        println!("Skipped rows:");
        for line in skipped_lines(&result.output.skipped) {
            println!("{line}");
        }
    }
}

pub fn summary_table(result: &NormalizeResult) -> Table {
    let output = &result.output;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Processed"), Cell::new(output.processed())]);
    table.add_row(vec![
        Cell::new("Normalized"),
        count_cell(output.normalized_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(output.skipped_count(), Color::Yellow),
    ]);
    table
}

/// One `Row: {...}, Reason: {...}` line per skipped record.
pub fn skipped_lines(skipped: &[SkippedRecord]) -> Vec<String> {
    skipped.iter().map(ToString::to_string).collect()
}

pub fn print_check_table(outcomes: &[CheckOutcome]) {
    println!("{}", check_table(outcomes));
}

pub fn check_table(outcomes: &[CheckOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Status"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for outcome in outcomes {
        let (status, result) = match &outcome.result {
            Ok(value) => (
                Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(value),
            ),
            Err(reason) => (
                Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold),
                Cell::new(reason).fg(Color::Red),
            ),
        };
        table.add_row(vec![Cell::new(format!("{:?}", outcome.input)), status, result]);
    }
    table
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
