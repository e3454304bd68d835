use crate::domain::{Category, IncomeRecord, PeriodSelector};
use crate::report::aggregate::{aggregate, ExpenseReport};
use crate::report::charts::{monthly_expense_totals, transaction_counts, MonthlySeries};
use crate::report::grid::{compute_totals, project, GridRow, GridTotals};
use crate::report::years::{available_years, snap_to_available};

pub struct ReportService;

impl ReportService {
    pub fn run(
        categories: &[Category],
        income: &[IncomeRecord],
        period: &PeriodSelector,
    ) -> ExpenseReport {
        aggregate(categories, income, period)
    }

    pub fn grid(report: &ExpenseReport) -> (Vec<GridRow>, GridTotals) {
        let rows = project(&report.categories);
        let totals = compute_totals(&rows);
        (rows, totals)
    }

    pub fn years(categories: &[Category], income: &[IncomeRecord], fallback_year: i32) -> Vec<i32> {
        available_years(categories, income, fallback_year)
    }

    pub fn corrected_year(available: &[i32], selected: i32) -> i32 {
        snap_to_available(available, selected)
    }

    pub fn monthly_series(report: &ExpenseReport) -> MonthlySeries {
        monthly_expense_totals(report)
    }

    pub fn counts(report: &ExpenseReport) -> Vec<(String, usize)> {
        transaction_counts(report)
    }
}
