//! In-memory ledger store for tests and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{Category, DateWindow, IncomeRecord};
use crate::errors::LedgerError;
use crate::storage::json_store::LedgerFile;
use crate::storage::{LedgerSource, Result};

/// Keeps one [`LedgerFile`] per owner behind a lock. Reads hand out clones
/// so callers can never alias the stored snapshot.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    ledgers: RwLock<HashMap<String, LedgerFile>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, owner: impl Into<String>, ledger: LedgerFile) {
        self.ledgers
            .write()
            .expect("ledger map lock poisoned")
            .insert(owner.into(), ledger);
    }

    fn with_ledger<T>(&self, owner: &str, f: impl FnOnce(&LedgerFile) -> T) -> Result<T> {
        let ledgers = self.ledgers.read().expect("ledger map lock poisoned");
        ledgers
            .get(owner)
            .map(f)
            .ok_or_else(|| LedgerError::UnknownOwner(owner.into()))
    }
}

impl LedgerSource for MemoryLedgerStore {
    fn fetch_categories_with_expenses(&self, owner: &str) -> Result<Vec<Category>> {
        self.with_ledger(owner, |ledger| ledger.categories.clone())
    }

    fn fetch_income(&self, owner: &str, window: Option<DateWindow>) -> Result<Vec<IncomeRecord>> {
        self.with_ledger(owner, |ledger| match window {
            Some(window) => ledger
                .income
                .iter()
                .copied()
                .filter(|record| window.contains(record.date))
                .collect(),
            None => ledger.income.clone(),
        })
    }
}
