//! Domain type for income entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single income entry. Income is not associated with any category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IncomeRecord {
    pub amount: f64,
    pub date: NaiveDate,
}

impl IncomeRecord {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self { amount, date }
    }
}
