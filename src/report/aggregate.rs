//! Period-scoped aggregation of the ledger tree.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, IncomeRecord, PeriodMode, PeriodSelector};
use crate::report::months::MonthlyBreakdown;

/// Per-expense-type totals for the active period. `monthly` is populated
/// only when the period is yearly; a monthly period is never bucketed
/// further.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedExpenseType {
    pub id: Uuid,
    pub name: String,
    pub total_amount: f64,
    #[serde(default)]
    pub monthly: MonthlyBreakdown,
    pub transaction_count: usize,
}

/// Per-category totals for the active period. `total_amount` is exactly
/// the sum of the expense-type totals; `percentage` is this category's
/// share of all expenses, 0-100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedCategory {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub total_amount: f64,
    pub expense_types: Vec<AggregatedExpenseType>,
    pub percentage: f64,
}

/// The full output bundle of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseReport {
    pub period: PeriodSelector,
    pub categories: Vec<AggregatedCategory>,
    pub total_income: f64,
    pub total_expenses: f64,
}

impl ExpenseReport {
    pub fn surplus(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Label for the surplus figure; the display layer shows the magnitude
    /// next to it.
    pub fn surplus_label(&self) -> &'static str {
        if self.surplus() < 0.0 {
            "Deficit"
        } else {
            "Surplus"
        }
    }
}

/// Aggregates a ledger snapshot for one period.
///
/// Categories and expense types keep the order the store returned them in,
/// and every one of them appears in the output even when nothing matched
/// the period. Inputs are only borrowed; each run builds fresh aggregates.
pub fn aggregate(
    categories: &[Category],
    income: &[IncomeRecord],
    period: &PeriodSelector,
) -> ExpenseReport {
    let window = period.window();
    let total_income: f64 = income
        .iter()
        .filter(|record| window.contains(record.date))
        .map(|record| record.amount)
        .sum();

    // First pass: totals. Percentages need the grand total across all
    // categories, so they cannot be filled in here.
    let mut aggregated: Vec<AggregatedCategory> = categories
        .iter()
        .map(|category| aggregate_category(category, period))
        .collect();

    let total_expenses: f64 = aggregated.iter().map(|category| category.total_amount).sum();

    // Second pass: percentages.
    for category in &mut aggregated {
        category.percentage = if total_expenses > 0.0 {
            category.total_amount / total_expenses * 100.0
        } else {
            0.0
        };
    }

    ExpenseReport {
        period: *period,
        categories: aggregated,
        total_income,
        total_expenses,
    }
}

fn aggregate_category(category: &Category, period: &PeriodSelector) -> AggregatedCategory {
    let expense_types: Vec<AggregatedExpenseType> = category
        .expense_types
        .iter()
        .map(|expense_type| {
            let mut total = 0.0;
            let mut count = 0;
            let mut monthly = MonthlyBreakdown::new();
            for record in &expense_type.expenses {
                if !period.contains(record.date) {
                    continue;
                }
                total += record.amount;
                count += 1;
                if period.mode == PeriodMode::Yearly {
                    monthly.add(record.date.month0() as usize, record.amount);
                }
            }
            AggregatedExpenseType {
                id: expense_type.id,
                name: expense_type.name.clone(),
                total_amount: total,
                monthly,
                transaction_count: count,
            }
        })
        .collect();

    let total_amount = expense_types.iter().map(|t| t.total_amount).sum();

    AggregatedCategory {
        id: category.id,
        name: category.name.clone(),
        color: category.color.clone(),
        total_amount,
        expense_types,
        percentage: 0.0,
    }
}
