use crate::report::csv::{export_file_name, serialize};
use crate::report::grid::{GridRow, GridTotals};

pub struct ExportService;

impl ExportService {
    /// The CSV text for a projected grid.
    pub fn csv(rows: &[GridRow], totals: &GridTotals) -> String {
        serialize(rows, totals)
    }

    /// The suggested download name for an export of `year`.
    pub fn file_name(year: i32) -> String {
        export_file_name(year)
    }
}
