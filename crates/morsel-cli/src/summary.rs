use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use morsel_model::{FileReport, FileSkip, FileStatus};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_directory.display());
    println!("Pattern: {}", result.pattern);
    if !result.files.is_empty() {
        println!("{}", file_table(&result.files));
    }
    match (&result.failure, &result.output_path) {
        (Some(failure), _) => eprintln!("error: {failure}"),
        (None, Some(path)) => {
            println!("Result saved to {}", path.display());
            println!("Total records: {}", result.total_records);
        }
        (None, None) => {
            println!("Dry run: no output written");
            println!("Total records: {}", result.total_records);
        }
    }
}

/// Per-file outcome table with a totals row.
pub fn file_table(files: &[FileReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    for file in files {
        total_rows += file.rows();
        let (status, rows, detail) = match &file.status {
            FileStatus::Contributed { rows } => (
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(rows),
                dim_cell("-"),
            ),
            FileStatus::Skipped { reason } => (
                skip_cell(reason),
                dim_cell(0),
                Cell::new(reason.to_string()),
            ),
        };
        table.add_row(vec![
            Cell::new(file.file_name()).fg(Color::Blue),
            status,
            rows,
            detail,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell(format!("{} file(s)", files.len())),
    ]);
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn skip_cell(reason: &FileSkip) -> Cell {
    let color = if reason.is_error() {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(reason.label()).fg(color)
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
