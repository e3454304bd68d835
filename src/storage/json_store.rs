//! File-backed ledger store: one JSON document per owner.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Category, DateWindow, IncomeRecord};
use crate::errors::LedgerError;
use crate::storage::{LedgerSource, Result};

const CURRENT_SCHEMA_VERSION: u8 = 1;
const LEDGER_EXTENSION: &str = "json";

/// On-disk shape of an owner's ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerFile {
    #[serde(default = "LedgerFile::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub income: Vec<IncomeRecord>,
}

impl LedgerFile {
    pub fn new(categories: Vec<Category>, income: Vec<IncomeRecord>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            categories,
            income,
        }
    }

    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Stores each owner's ledger as `<base_dir>/<owner>.json`.
pub struct JsonLedgerStore {
    base_dir: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// A store rooted in the platform data directory, falling back to the
    /// current directory when none is available.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finance_core");
        Self::new(base)
    }

    pub fn ledger_path(&self, owner: &str) -> PathBuf {
        self.base_dir.join(owner).with_extension(LEDGER_EXTENSION)
    }

    /// Writes the ledger atomically by staging to a temporary file.
    pub fn save(&self, owner: &str, ledger: &LedgerFile) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.ledger_path(owner);
        save_ledger_to_path(ledger, &path)
    }

    pub fn load(&self, owner: &str) -> Result<LedgerFile> {
        let path = self.ledger_path(owner);
        if !path.exists() {
            return Err(LedgerError::UnknownOwner(owner.into()));
        }
        load_ledger_from_path(&path)
    }
}

/// Writes the provided ledger to disk atomically by staging to a temporary file.
pub fn save_ledger_to_path(ledger: &LedgerFile, path: &Path) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a ledger snapshot from disk, returning structured errors on failure.
pub fn load_ledger_from_path(path: &Path) -> Result<LedgerFile> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

impl LedgerSource for JsonLedgerStore {
    fn fetch_categories_with_expenses(&self, owner: &str) -> Result<Vec<Category>> {
        Ok(self.load(owner)?.categories)
    }

    fn fetch_income(&self, owner: &str, window: Option<DateWindow>) -> Result<Vec<IncomeRecord>> {
        let income = self.load(owner)?.income;
        Ok(match window {
            Some(window) => income
                .into_iter()
                .filter(|record| window.contains(record.date))
                .collect(),
            None => income,
        })
    }
}
