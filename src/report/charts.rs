//! Chart-ready projections of an expense report.

use serde::Serialize;

use crate::report::aggregate::ExpenseReport;
use crate::report::months::MONTH_LABELS;

/// A 12-point series of monthly expense totals for one year, summed across
/// every category. Months with no matching records hold 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySeries {
    pub labels: [&'static str; 12],
    pub amounts: [f64; 12],
}

/// Sums all per-type monthly buckets into one series. Meaningful for
/// yearly-mode reports; a monthly-mode report has no buckets and yields an
/// all-zero series.
pub fn monthly_expense_totals(report: &ExpenseReport) -> MonthlySeries {
    let mut amounts = [0.0; 12];
    for category in &report.categories {
        for expense_type in &category.expense_types {
            for month0 in 0..12 {
                if let Some(amount) = expense_type.monthly.amount(month0) {
                    amounts[month0] += amount;
                }
            }
        }
    }
    MonthlySeries {
        labels: MONTH_LABELS,
        amounts,
    }
}

/// Transaction counts per expense type, in report order, for count-style
/// charts and tooltips.
pub fn transaction_counts(report: &ExpenseReport) -> Vec<(String, usize)> {
    report
        .categories
        .iter()
        .flat_map(|category| {
            category
                .expense_types
                .iter()
                .map(|expense_type| (expense_type.name.clone(), expense_type.transaction_count))
        })
        .collect()
}
