mod budget;
mod expense;
mod summary;
mod usage;

pub use budget::Budget;
pub use expense::{Expense, ExpensePatch};
pub use summary::{CategoryTotal, MonthlyTotal};
pub use usage::{BudgetSummary, BudgetUsage};

pub(crate) use usage::capped_percentage;
