#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the aggregation, time-bucketing, and reporting
//! primitives that power a personal expense and income tracker.
//!
//! The crate turns a ledger snapshot (categories, expense types, expense
//! records, income records) into period-scoped aggregates, a two-level
//! reporting grid, and a CSV export. Fetching the snapshot is delegated to
//! a [`storage::LedgerSource`]; rendering and navigation live outside this
//! crate entirely.

pub mod core;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
