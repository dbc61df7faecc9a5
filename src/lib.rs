//! Outlay - an in-memory expense tracking and budget comparison core.
//!
//! Two cooperating stores: [`ExpenseStore`] owns dated expense records and
//! answers filtered/aggregated queries; [`BudgetBook`] owns per-category
//! spending limits and joins them against expense summaries to produce
//! usage rows. Both are plain owned values with no interior global state,
//! intended to be held by whatever front end consumes them.

pub mod budgets;
pub mod error;
pub mod format;
pub mod models;
pub mod page;
pub mod store;

pub use budgets::BudgetBook;
pub use error::{OutlayError, Result};
pub use models::{
    Budget, BudgetSummary, BudgetUsage, CategoryTotal, Expense, ExpensePatch, MonthlyTotal,
};
pub use page::{PageInfo, Paginated};
pub use store::{DateRange, ExpenseStore};
