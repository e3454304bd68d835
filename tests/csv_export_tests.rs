use chrono::NaiveDate;
use finance_core::{
    core::services::{ExportService, ReportService},
    domain::{Category, ExpenseType, PeriodSelector},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn csv_export_matches_expected_layout() {
    let categories = vec![
        Category::new("Groceries", "#4caf50").with_expense_type(
            ExpenseType::new("Food")
                .with_expense(100.0, date(2024, 1, 5))
                .with_expense(50.0, date(2024, 2, 10)),
        ),
        Category::new("Transport", "#ff9800")
            .with_expense_type(ExpenseType::new("Fuel").with_expense(70.0, date(2024, 2, 3))),
    ];
    let report = ReportService::run(&categories, &[], &PeriodSelector::yearly(2024));
    let (rows, totals) = ReportService::grid(&report);
    let csv = ExportService::csv(&rows, &totals);

    insta::assert_snapshot!(csv.trim_end(), @r"
    Category/Type,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Year Total
    Groceries,100,50,0,0,0,0,0,0,0,0,0,0,150
      Food,100,50,0,0,0,0,0,0,0,0,0,0,150
    Transport,0,70,0,0,0,0,0,0,0,0,0,0,70
      Fuel,0,70,0,0,0,0,0,0,0,0,0,0,70
    TOTAL,100,120,0,0,0,0,0,0,0,0,0,0,220
    ");
}
