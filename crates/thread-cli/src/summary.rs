use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thread_cli::replay::ReplayReport;

const KINDS: [&str; 4] = ["add", "edit", "delete", "reply"];

pub fn print_summary(report: &ReplayReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Action"),
        header_cell("Applied"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for kind in KINDS {
        let (applied, rejected) = report.counts_for(kind);
        table.add_row(vec![
            Cell::new(kind),
            count_cell(applied, Color::Green),
            count_cell(rejected, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.applied_count(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(report.rejected_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
    eprintln!(
        "Comments: {} ({} top-level), revision {}",
        report.forest.total_count(),
        report.forest.len(),
        report.revision
    );
    print_rejection_table(report);
}

fn print_rejection_table(report: &ReplayReport) {
    if !report.has_rejections() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Action"),
        header_cell("Target"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for step in report.rejections() {
        let target = step
            .action
            .target()
            .map_or_else(|| dim_cell("-"), |id| Cell::new(format!("#{id}")));
        let reason = step
            .outcome
            .rejection()
            .map_or_else(String::new, ToString::to_string);
        table.add_row(vec![
            Cell::new(step.index),
            Cell::new(step.action.kind()),
            target,
            Cell::new(reason).fg(Color::Yellow),
        ]);
    }
    eprintln!();
    eprintln!("Rejected:");
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
