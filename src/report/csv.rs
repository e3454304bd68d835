//! Flat CSV rendering of the reporting grid.
//!
//! Names are written as-is; a name containing the column delimiter is not
//! escaped or quoted. That keeps the output trivially diffable and is an
//! accepted limitation of the export.

use crate::report::grid::{GridRow, GridTotals};
use crate::report::months::MONTH_LABELS;

/// Serializes the grid into delimited text: a header, one row per
/// category, one indented row per expense type, and a final `TOTAL` row.
/// Months with no data serialize as the literal `0`.
pub fn serialize(rows: &[GridRow], totals: &GridTotals) -> String {
    let mut lines = Vec::with_capacity(2 + rows.len());

    let mut header = vec!["Category/Type".to_string()];
    header.extend(MONTH_LABELS.iter().map(|label| label.to_string()));
    header.push("Year Total".into());
    lines.push(header.join(","));

    for row in rows {
        lines.push(data_line(&row.name, |month0| row.monthly.amount(month0), row.year_total));
        for subrow in &row.expense_types {
            lines.push(data_line(
                &format!("  {}", subrow.name),
                |month0| subrow.monthly.amount(month0),
                subrow.year_total,
            ));
        }
    }

    lines.push(data_line(
        "TOTAL",
        |month0| Some(totals.monthly[month0]),
        totals.grand_total,
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// The suggested download name for an export of `year`.
pub fn export_file_name(year: i32) -> String {
    format!("expense-breakdown-{year}.csv")
}

fn data_line(name: &str, amount: impl Fn(usize) -> Option<f64>, total: f64) -> String {
    let mut cells = vec![name.to_string()];
    for month0 in 0..12 {
        cells.push(match amount(month0) {
            Some(value) => value.to_string(),
            None => "0".into(),
        });
    }
    cells.push(total.to_string());
    cells.join(",")
}
