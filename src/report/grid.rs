//! Projection of aggregates into the two-level reporting grid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::report::aggregate::AggregatedCategory;
use crate::report::months::MonthlyBreakdown;

/// Expense-type subrow of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridSubrow {
    pub id: Uuid,
    pub name: String,
    pub category_name: String,
    #[serde(default)]
    pub monthly: MonthlyBreakdown,
    pub year_total: f64,
}

/// Category-level row of the grid with its nested subrows. The grid always
/// carries the full tree; whether subrows are shown expanded is UI state
/// that never reaches this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridRow {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub monthly: MonthlyBreakdown,
    pub year_total: f64,
    pub expense_types: Vec<GridSubrow>,
}

/// The synthetic totals row and totals column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridTotals {
    pub monthly: [f64; 12],
    pub grand_total: f64,
}

/// Reshapes aggregated categories into grid rows. A category row's monthly
/// cells are re-derived by summing its subrows, which must agree with the
/// per-type buckets the aggregation already produced.
pub fn project(categories: &[AggregatedCategory]) -> Vec<GridRow> {
    categories
        .iter()
        .map(|category| {
            let expense_types: Vec<GridSubrow> = category
                .expense_types
                .iter()
                .map(|expense_type| GridSubrow {
                    id: expense_type.id,
                    name: expense_type.name.clone(),
                    category_name: category.name.clone(),
                    monthly: expense_type.monthly.clone(),
                    year_total: expense_type.total_amount,
                })
                .collect();

            let mut monthly = MonthlyBreakdown::new();
            for subrow in &expense_types {
                monthly.merge(&subrow.monthly);
            }

            GridRow {
                id: category.id,
                name: category.name.clone(),
                color: category.color.clone(),
                monthly,
                year_total: category.total_amount,
                expense_types,
            }
        })
        .collect()
}

/// Sums the category rows into the totals row and grand total.
pub fn compute_totals(rows: &[GridRow]) -> GridTotals {
    let mut monthly = [0.0; 12];
    let mut grand_total = 0.0;
    for row in rows {
        for month0 in 0..12 {
            if let Some(amount) = row.monthly.amount(month0) {
                monthly[month0] += amount;
            }
        }
        grand_total += row.year_total;
    }
    GridTotals {
        monthly,
        grand_total,
    }
}

/// Placeholder shown for subrow months with no data.
pub const EMPTY_CELL: &str = "-";

/// Display text for a category-row month cell: absent months read `0`.
pub fn category_cell(row: &GridRow, month0: usize) -> String {
    match row.monthly.amount(month0) {
        Some(amount) => amount.to_string(),
        None => "0".into(),
    }
}

/// Display text for an expense-type month cell: absent months read as a
/// dash, keeping the two grid levels' conventions distinct.
pub fn subrow_cell(subrow: &GridSubrow, month0: usize) -> String {
    match subrow.monthly.amount(month0) {
        Some(amount) => amount.to_string(),
        None => EMPTY_CELL.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ExpenseType, PeriodSelector};
    use crate::report::aggregate::aggregate;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_rows() -> Vec<GridRow> {
        let categories = vec![
            Category::new("Groceries", "#4caf50")
                .with_expense_type(
                    ExpenseType::new("Food")
                        .with_expense(100.0, date(2024, 1, 5))
                        .with_expense(50.0, date(2024, 2, 10)),
                )
                .with_expense_type(ExpenseType::new("Drinks").with_expense(30.0, date(2024, 1, 9))),
            Category::new("Transport", "#ff9800")
                .with_expense_type(ExpenseType::new("Fuel").with_expense(70.0, date(2024, 2, 3))),
        ];
        let report = aggregate(&categories, &[], &PeriodSelector::yearly(2024));
        project(&report.categories)
    }

    #[test]
    fn rows_sum_their_subrows_per_month() {
        let rows = sample_rows();
        let groceries = &rows[0];
        assert_eq!(groceries.monthly.amount(0), Some(130.0));
        assert_eq!(groceries.monthly.amount(1), Some(50.0));
        assert_eq!(groceries.monthly.amount(2), None);
        assert_eq!(groceries.year_total, 180.0);
        assert_eq!(groceries.expense_types.len(), 2);
        assert_eq!(groceries.expense_types[0].category_name, "Groceries");
    }

    #[test]
    fn row_monthly_agrees_with_aggregation_buckets() {
        let rows = sample_rows();
        for row in &rows {
            let mut summed = MonthlyBreakdown::new();
            for subrow in &row.expense_types {
                summed.merge(&subrow.monthly);
            }
            assert_eq!(row.monthly, summed);
        }
    }

    #[test]
    fn totals_cover_every_row() {
        let rows = sample_rows();
        let totals = compute_totals(&rows);
        assert_eq!(totals.monthly[0], 130.0);
        assert_eq!(totals.monthly[1], 120.0);
        assert_eq!(totals.monthly[2], 0.0);
        assert_eq!(totals.grand_total, 250.0);
    }

    #[test]
    fn cell_display_uses_level_specific_conventions() {
        let rows = sample_rows();
        let groceries = &rows[0];
        assert_eq!(category_cell(groceries, 0), "130");
        assert_eq!(category_cell(groceries, 5), "0");
        let drinks = &groceries.expense_types[1];
        assert_eq!(subrow_cell(drinks, 0), "30");
        assert_eq!(subrow_cell(drinks, 1), EMPTY_CELL);
    }
}
