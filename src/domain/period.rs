//! Reporting periods and the date windows they resolve to.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Granularity of a reporting period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodMode {
    Monthly,
    Yearly,
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodMode::Monthly => "Monthly",
            PeriodMode::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}

/// The period a report is scoped to. `month` is zero-based (0 = January)
/// and only consulted in monthly mode. A `month` outside 0-11 is a caller
/// contract violation; callers are expected to validate before building a
/// selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodSelector {
    pub mode: PeriodMode,
    pub year: i32,
    pub month: u32,
}

impl PeriodSelector {
    pub fn monthly(year: i32, month: u32) -> Self {
        debug_assert!(month < 12, "month must be in 0..=11");
        Self {
            mode: PeriodMode::Monthly,
            year,
            month,
        }
    }

    pub fn yearly(year: i32) -> Self {
        Self {
            mode: PeriodMode::Yearly,
            year,
            month: 0,
        }
    }

    /// The monthly period containing `date`. This is the default-period
    /// constructor: the reference date is an explicit argument, never an
    /// ambient clock read, so report setups stay deterministic.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::monthly(date.year(), date.month0())
    }

    /// Resolves the inclusive `[start, end]` window for this period. The
    /// last day of a month is computed, never hard-coded, so 28/29/30/31
    /// day months all come out right.
    pub fn window(&self) -> DateWindow {
        match self.mode {
            PeriodMode::Monthly => {
                let start = NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap();
                let end = NaiveDate::from_ymd_opt(
                    self.year,
                    self.month + 1,
                    days_in_month(self.year, self.month + 1),
                )
                .unwrap();
                DateWindow { start, end }
            }
            PeriodMode::Yearly => DateWindow {
                start: NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap(),
            },
        }
    }

    /// Period membership for a record date, tested on calendar components.
    /// `NaiveDate` carries no timezone, so the year and month compared here
    /// are exactly the ones the record was written with.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.mode {
            PeriodMode::Monthly => date.year() == self.year && date.month0() == self.month,
            PeriodMode::Yearly => date.year() == self.year,
        }
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn monthly_window_covers_whole_month() {
        let window = PeriodSelector::monthly(2024, 0).window();
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, date(2024, 1, 31));
    }

    #[test]
    fn monthly_window_handles_leap_february() {
        let window = PeriodSelector::monthly(2024, 1).window();
        assert_eq!(window.end, date(2024, 2, 29));
        let window = PeriodSelector::monthly(2023, 1).window();
        assert_eq!(window.end, date(2023, 2, 28));
    }

    #[test]
    fn yearly_window_spans_calendar_year() {
        let window = PeriodSelector::yearly(2024).window();
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, date(2024, 12, 31));
        assert!(window.contains(date(2024, 6, 15)));
        assert!(!window.contains(date(2025, 1, 1)));
    }

    #[test]
    fn membership_matches_calendar_components() {
        let january = PeriodSelector::monthly(2024, 0);
        assert!(january.contains(date(2024, 1, 31)));
        assert!(!january.contains(date(2024, 2, 1)));
        assert!(!january.contains(date(2023, 1, 15)));

        let yearly = PeriodSelector::yearly(2024);
        assert!(yearly.contains(date(2024, 1, 1)));
        assert!(!yearly.contains(date(2023, 12, 31)));
    }

    #[test]
    fn new_year_eve_stays_in_its_own_year() {
        // Dates are calendar values with no timezone attached, so a record
        // written on Dec 31 can never drift into the following year.
        let eve = date(2024, 12, 31);
        assert!(PeriodSelector::yearly(2024).contains(eve));
        assert!(!PeriodSelector::yearly(2025).contains(eve));
        assert!(PeriodSelector::monthly(2024, 11).contains(eve));
    }

    #[test]
    fn window_rejects_reversed_bounds() {
        let err = DateWindow::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(err.is_err());
        let single_day = DateWindow::new(date(2024, 2, 1), date(2024, 2, 1));
        assert!(single_day.is_ok());
    }

    #[test]
    fn for_date_builds_monthly_selector() {
        let selector = PeriodSelector::for_date(date(2024, 3, 14));
        assert_eq!(selector.mode, PeriodMode::Monthly);
        assert_eq!(selector.year, 2024);
        assert_eq!(selector.month, 2);
    }
}
