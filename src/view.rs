//! Terminal rendering of a matrix plan
//!
//! Strictly downstream of the engine: consumes a [`MatrixPlan`] and lays it
//! out as a text table. No color math happens here.

use crate::evaluate::{ratio_label, CellResult};
use crate::planner::{GridCell, MatrixPlan};

/// Placeholder shown for a suppressed cell
const SUPPRESSED_MARK: &str = "\u{00b7}";

fn cell_text(cell: &GridCell) -> String {
    match cell.result {
        CellResult::Suppressed => SUPPRESSED_MARK.to_string(),
        CellResult::Visible { ratio, tier, .. } => {
            format!("{} {}", ratio_label(ratio), tier.label())
        }
    }
}

/// Render a plan as a text table
///
/// First line is the matrix title; the header row carries the column labels
/// with their swatch hex, each following row starts with its axis label.
/// Suppressed cells render as a centered dot.
pub fn render_plan(plan: &MatrixPlan) -> String {
    let cell_texts: Vec<Vec<String>> = plan
        .rows
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();

    // Column widths: header label/swatch vs the widest cell in that column.
    let mut widths: Vec<usize> = plan
        .columns
        .iter()
        .map(|col| col.label.len().max(col.swatch_label.len()))
        .collect();
    for row in &cell_texts {
        for (col, text) in row.iter().enumerate() {
            if text.len() > widths[col] {
                widths[col] = text.len();
            }
        }
    }

    let axis_width = plan
        .rows
        .iter()
        .map(|row| row.header.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&plan.title);
    out.push('\n');

    let mut header = format!("{:axis_width$}", "");
    let mut swatches = format!("{:axis_width$}", "");
    for (col, width) in plan.columns.iter().zip(widths.iter().copied()) {
        header.push_str(&format!("  {:width$}", col.label));
        swatches.push_str(&format!("  {:width$}", col.swatch_label));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(swatches.trim_end());
    out.push('\n');

    for (row, texts) in plan.rows.iter().zip(&cell_texts) {
        let mut line = format!("{:axis_width$}", row.header.label);
        for (text, width) in texts.iter().zip(widths.iter().copied()) {
            line.push_str(&format!("  {:width$}", text));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
