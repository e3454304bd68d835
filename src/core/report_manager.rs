//! Coordinates ledger fetches, year discovery, and atomic report publishing.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Category, IncomeRecord, PeriodSelector};
use crate::report::aggregate::{aggregate, ExpenseReport};
use crate::report::grid::{compute_totals, project, GridRow, GridTotals};
use crate::report::years::{available_years, snap_to_available};
use crate::storage::LedgerSource;

/// One complete, self-consistent recomputation result. A bundle is only
/// ever replaced wholesale; aggregates from different periods are never
/// mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBundle {
    pub report: ExpenseReport,
    pub grid: Vec<GridRow>,
    pub totals: GridTotals,
}

/// Facade that owns the report lifecycle for one consumer: the active
/// period, the discovered year set, and the last published bundle.
///
/// Every input change funnels through [`ReportManager::refresh`], which
/// recomputes everything from scratch and publishes the result as one
/// atomic replace. When two refreshes race at the caller's level, whichever
/// applies last wins in full; the `generation` counter records that order.
pub struct ReportManager {
    source: Box<dyn LedgerSource>,
    period: PeriodSelector,
    available_years: Vec<i32>,
    published: Option<ReportBundle>,
    generation: u64,
}

impl ReportManager {
    /// The initial period is an explicit argument so construction never
    /// consults the system clock; callers pass
    /// `PeriodSelector::for_date(today)` when they want "now".
    pub fn new(source: Box<dyn LedgerSource>, initial_period: PeriodSelector) -> Self {
        Self {
            source,
            period: initial_period,
            available_years: Vec::new(),
            published: None,
            generation: 0,
        }
    }

    pub fn period(&self) -> PeriodSelector {
        self.period
    }

    pub fn set_period(&mut self, period: PeriodSelector) {
        self.period = period;
    }

    /// Years selectable in the UI; empty until the first refresh.
    pub fn available_years(&self) -> &[i32] {
        &self.available_years
    }

    /// The last successfully published bundle, if any.
    pub fn published(&self) -> Option<&ReportBundle> {
        self.published.as_ref()
    }

    /// Monotonic counter of successful publishes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fetches the owner's ledger and republishes the report. On fetch
    /// failure the previously published bundle stays untouched and the
    /// error is surfaced once, so callers can tell "no data" (a valid zero
    /// bundle) apart from "failed to compute" (stale bundle retained).
    pub fn refresh(&mut self, owner: &str) -> ServiceResult<&ReportBundle> {
        let categories = match self.source.fetch_categories_with_expenses(owner) {
            Ok(categories) => categories,
            Err(err) => {
                tracing::warn!(owner, error = %err, "ledger fetch failed; keeping previous report");
                return Err(ServiceError::Ledger(err));
            }
        };
        let income = match self.source.fetch_income(owner, None) {
            Ok(income) => income,
            Err(err) => {
                tracing::warn!(owner, error = %err, "income fetch failed; keeping previous report");
                return Err(ServiceError::Ledger(err));
            }
        };
        Ok(self.recompute(&categories, &income))
    }

    /// The single "recompute now" entry point: year discovery, selection
    /// correction, aggregation, grid projection, and the atomic publish.
    pub fn recompute(&mut self, categories: &[Category], income: &[IncomeRecord]) -> &ReportBundle {
        let years = available_years(categories, income, self.period.year);
        if years != self.available_years {
            let corrected = snap_to_available(&years, self.period.year);
            if corrected != self.period.year {
                tracing::debug!(
                    from = self.period.year,
                    to = corrected,
                    "selected year no longer available; snapping to most recent"
                );
                self.period.year = corrected;
            }
            self.available_years = years;
        }

        let report = aggregate(categories, income, &self.period);
        let grid = project(&report.categories);
        let totals = compute_totals(&grid);

        self.generation += 1;
        self.published.insert(ReportBundle {
            report,
            grid,
            totals,
        })
    }
}
