use rust_decimal::Decimal;

use super::Budget;
use crate::format::format_amount;

/// Spent-vs-limit comparison for one budget within a date window.
/// Derived on every query, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    /// Goes negative when over budget.
    pub remaining: Decimal,
    /// Capped at 100 so progress bars render simply; over-budget shows
    /// through `remaining`, not here.
    pub percentage: Decimal,
    pub description: String,
}

impl BudgetUsage {
    pub(crate) fn from_budget(budget: &Budget, spent: Decimal) -> Self {
        Self {
            category: budget.category.clone(),
            limit: budget.limit,
            spent,
            remaining: budget.limit - spent,
            percentage: capped_percentage(spent, budget.limit),
            description: budget.description.clone(),
        }
    }
}

impl std::fmt::Display for BudgetUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} of {} ({:.0}%)",
            self.category,
            format_amount(self.spent),
            format_amount(self.limit),
            self.percentage
        )
    }
}

/// Aggregate spent-vs-limit across every budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

impl std::fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} budgeted ({:.0}%)",
            format_amount(self.total_spent),
            format_amount(self.total_budget),
            self.percentage
        )
    }
}

/// `spent / limit` as a percentage, capped at 100. A non-positive limit
/// yields 0 rather than a division by zero.
pub(crate) fn capped_percentage(spent: Decimal, limit: Decimal) -> Decimal {
    if limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (spent * Decimal::ONE_HUNDRED / limit).min(Decimal::ONE_HUNDRED)
}
