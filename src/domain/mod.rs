pub mod category;
pub mod common;
pub mod income;
pub mod period;

pub use category::{Category, ExpenseRecord, ExpenseType};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use income::IncomeRecord;
pub use period::{DateWindow, PeriodMode, PeriodSelector};
