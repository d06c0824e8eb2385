use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use drivemap_core::Mapping;

use crate::types::MatchSummary;

/// Compiled entries in match order, followed by any skipped keys.
pub fn pattern_table(mapping: &Mapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Pattern"),
        header_cell("Label"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, entry) in mapping.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(entry.pattern.as_str()),
            label_cell(&entry.label),
            Cell::new("ok").fg(Color::Green),
        ]);
    }
    for error in mapping.skipped() {
        table.add_row(vec![
            dim_cell("-"),
            Cell::new(error.pattern()).fg(Color::DarkGrey),
            dim_cell("-"),
            Cell::new(format!("skipped: {error}")).fg(Color::Yellow),
        ]);
    }
    table
}

pub fn summary_line(summary: &MatchSummary) -> String {
    let mut line = format!(
        "matched {} of {} candidates ({} patterns",
        summary.matched, summary.candidates, summary.entries
    );
    if summary.skipped > 0 {
        line.push_str(&format!(", {} skipped", summary.skipped));
    }
    line.push(')');
    line
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
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

fn label_cell(label: &str) -> Cell {
    if label.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_mentions_skipped_only_when_present() {
        let mut summary = MatchSummary {
            candidates: 23,
            matched: 19,
            entries: 5,
            skipped: 0,
        };
        assert_eq!(
            summary_line(&summary),
            "matched 19 of 23 candidates (5 patterns)"
        );
        summary.skipped = 2;
        assert_eq!(
            summary_line(&summary),
            "matched 19 of 23 candidates (5 patterns, 2 skipped)"
        );
    }
}
