//! Domain types for the expense side of the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single expense entry. Immutable once loaded into the engine; the
/// ledger store owns the canonical copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self { amount, date }
    }
}

/// A named kind of spending within a category, e.g. "Food" under
/// "Groceries". Carries its expense records in ledger order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseType {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl ExpenseType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
        }
    }

    pub fn with_expense(mut self, amount: f64, date: NaiveDate) -> Self {
        self.expenses.push(ExpenseRecord::new(amount, date));
        self
    }
}

impl Identifiable for ExpenseType {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ExpenseType {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Top-level grouping of expense types. The `color` is a display hint
/// (hex string) carried through to chart and grid consumers untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub expense_types: Vec<ExpenseType>,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            expense_types: Vec::new(),
        }
    }

    pub fn with_expense_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_types.push(expense_type);
        self
    }

    /// Total number of expense records across all expense types.
    pub fn record_count(&self) -> usize {
        self.expense_types.iter().map(|t| t.expenses.len()).sum()
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({} types)", self.name, self.expense_types.len())
    }
}
