//! Year discovery over the full, unfiltered ledger.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::domain::{Category, IncomeRecord};

/// Collects the distinct calendar years present in any expense or income
/// record, sorted descending. Never empty: when no records exist at all
/// the caller-supplied `fallback_year` is returned alone, keeping the
/// engine free of ambient clock reads.
pub fn available_years(
    categories: &[Category],
    income: &[IncomeRecord],
    fallback_year: i32,
) -> Vec<i32> {
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for category in categories {
        for expense_type in &category.expense_types {
            for record in &expense_type.expenses {
                years.insert(record.date.year());
            }
        }
    }
    for record in income {
        years.insert(record.date.year());
    }

    if years.is_empty() {
        return vec![fallback_year];
    }
    years.into_iter().rev().collect()
}

/// The year-selection correction policy: a selected year that is no longer
/// available snaps to the most recent available one. `available` must be
/// non-empty, which [`available_years`] guarantees.
pub fn snap_to_available(available: &[i32], selected: i32) -> i32 {
    if available.contains(&selected) {
        selected
    } else {
        available[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ExpenseType};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_categories() -> Vec<Category> {
        vec![Category::new("Groceries", "#4caf50").with_expense_type(
            ExpenseType::new("Food")
                .with_expense(10.0, date(2022, 5, 1))
                .with_expense(20.0, date(2024, 7, 9)),
        )]
    }

    #[test]
    fn years_are_distinct_and_descending() {
        let income = vec![
            IncomeRecord::new(100.0, date(2024, 1, 1)),
            IncomeRecord::new(100.0, date(2022, 1, 1)),
        ];
        let years = available_years(&sample_categories(), &income, 2030);
        assert_eq!(years, vec![2024, 2022]);
    }

    #[test]
    fn empty_ledger_falls_back_to_given_year() {
        let years = available_years(&[], &[], 2026);
        assert_eq!(years, vec![2026]);
    }

    #[test]
    fn discovery_is_order_independent() {
        let mut reversed = sample_categories();
        reversed[0].expense_types[0].expenses.reverse();
        assert_eq!(
            available_years(&sample_categories(), &[], 2030),
            available_years(&reversed, &[], 2030)
        );
    }

    #[test]
    fn missing_selection_snaps_to_most_recent() {
        let years = available_years(&sample_categories(), &[], 2030);
        assert_eq!(snap_to_available(&years, 2023), 2024);
        assert_eq!(snap_to_available(&years, 2022), 2022);
    }
}
