use thiserror::Error;

/// Error type that captures common ledger store failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown owner: {0}")]
    UnknownOwner(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
