use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prodfeed_import::Report;

/// Print the run report: a count table, then each non-empty message stream.
pub fn print_report(report: &Report) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Messages")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Successes").fg(Color::Green),
        count_cell(report.successes().len(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Remarks").fg(Color::Yellow),
        count_cell(report.remarks().len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Errors").fg(Color::Red),
        count_cell(report.errors().len(), Color::Red),
    ]);
    println!("{table}");

    print_messages("Successes", report.successes());
    print_messages("Remarks", report.remarks());
    print_messages("Errors", report.errors());
    print_messages("Summary", report.summary());
}

/// Print the report as a single JSON document on stdout.
pub fn print_report_json(report: &Report) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_messages(title: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for message in messages {
        println!("- {message}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
