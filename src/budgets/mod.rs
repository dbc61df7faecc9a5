use rust_decimal::Decimal;

use crate::models::{capped_percentage, Budget, BudgetSummary, BudgetUsage};
use crate::store::{DateRange, ExpenseStore};

/// Per-category spending limits, joined against expense summaries on demand.
///
/// Holds at most one budget per category; `set` upserts on the category key.
/// Takes the expense store by reference for the join operations so callers
/// keep ownership of both.
#[derive(Debug)]
pub struct BudgetBook {
    budgets: Vec<Budget>,
    next_id: u64,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self {
            budgets: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn list(&self) -> Vec<Budget> {
        self.budgets.clone()
    }

    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Upsert keyed on category. An existing budget gets the new limit; its
    /// description is replaced only when a non-empty one is supplied (an
    /// empty string keeps the prior text). A new budget defaults its
    /// description to `"Budget for {category}"`.
    pub fn set(&mut self, category: &str, limit: Decimal, description: Option<&str>) -> Budget {
        let description = description.unwrap_or("");

        if let Some(budget) = self.budgets.iter_mut().find(|b| b.category == category) {
            budget.limit = limit;
            if !description.is_empty() {
                budget.description = description.to_string();
            }
            return budget.clone();
        }

        let description = if description.is_empty() {
            format!("Budget for {category}")
        } else {
            description.to_string()
        };
        let mut budget = Budget::new(category.to_string(), limit, description);
        budget.id = Some(format!("budget-{}-{}", slug(category), self.next_id));
        self.next_id += 1;
        self.budgets.push(budget.clone());
        budget
    }

    /// Remove the budget for `category`. A no-op when none exists, unlike
    /// expense removal which reports NotFound.
    pub fn remove(&mut self, category: &str) {
        self.budgets.retain(|b| b.category != category);
    }

    /// One usage row per budget — including categories with no spending in
    /// the window, which report `spent = 0`. Rows come back in budget
    /// insertion order.
    pub fn usage(&self, expenses: &ExpenseStore, range: Option<DateRange>) -> Vec<BudgetUsage> {
        let summary = expenses.category_summary(range);
        self.budgets
            .iter()
            .map(|budget| {
                let spent = summary
                    .iter()
                    .find(|t| t.category == budget.category)
                    .map_or(Decimal::ZERO, |t| t.amount);
                BudgetUsage::from_budget(budget, spent)
            })
            .collect()
    }

    /// Aggregate spent-vs-limit across every budget. `total_budget` ignores
    /// the window; `total_spent` is summed over the windowed usage rows.
    pub fn summary(&self, expenses: &ExpenseStore, range: Option<DateRange>) -> BudgetSummary {
        let total_budget: Decimal = self.budgets.iter().map(|b| b.limit).sum();
        let total_spent: Decimal = self
            .usage(expenses, range)
            .iter()
            .map(|u| u.spent)
            .sum();

        BudgetSummary {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            percentage: capped_percentage(total_spent, total_budget),
        }
    }
}

impl Default for BudgetBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase the category and collapse whitespace runs to dashes, for use in
/// generated budget ids.
fn slug(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
