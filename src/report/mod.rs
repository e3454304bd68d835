//! The reporting engine: period-scoped aggregation, year discovery, the
//! two-level grid projection, chart series, and the CSV export.

pub mod aggregate;
pub mod charts;
pub mod csv;
pub mod grid;
pub mod months;
pub mod years;

pub use aggregate::{aggregate, AggregatedCategory, AggregatedExpenseType, ExpenseReport};
pub use grid::{compute_totals, project, GridRow, GridSubrow, GridTotals};
pub use months::{month_label, MonthlyBreakdown, MONTH_LABELS};
pub use years::{available_years, snap_to_available};
