pub mod json_store;
pub mod memory;

use crate::domain::{Category, DateWindow, IncomeRecord};
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over ledger stores that can supply report inputs for an
/// owner. The engine only ever reads through this seam; writing records is
/// a store concern.
pub trait LedgerSource: Send + Sync {
    /// The full category tree with nested expense types and records, in
    /// store order.
    fn fetch_categories_with_expenses(&self, owner: &str) -> Result<Vec<Category>>;

    /// Income records for the owner, optionally restricted to an inclusive
    /// date window.
    fn fetch_income(&self, owner: &str, window: Option<DateWindow>) -> Result<Vec<IncomeRecord>>;
}

pub use json_store::{JsonLedgerStore, LedgerFile};
pub use memory::MemoryLedgerStore;
