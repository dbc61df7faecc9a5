use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{OutlayError, Result};
use crate::format::MONTH_LABELS;
use crate::models::{CategoryTotal, Expense, ExpensePatch, MonthlyTotal};
use crate::page::{paginate, Paginated};

/// Inclusive calendar-date window. An expense dated exactly on `start` or
/// `end` is inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a window from `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| OutlayError::InvalidInput(format!("invalid date {s:?}, expected YYYY-MM-DD")))
}

/// Authoritative in-memory list of expenses plus its derived views.
///
/// A plain owned value; hold one per logical caller (or behind a mutex if
/// shared across threads — nothing here is concurrency-safe on its own).
#[derive(Debug)]
pub struct ExpenseStore {
    /// Newest-first: `add` prepends.
    expenses: Vec<Expense>,
    next_id: u64,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    // ── Listing & filters ─────────────────────────────────────

    /// All expenses, newest-added first.
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn list_page(&self, page: usize, page_size: usize) -> Result<Paginated<Expense>> {
        paginate(&self.expenses, page, page_size)
    }

    pub fn by_date_range(&self, range: DateRange) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect()
    }

    pub fn by_date_range_page(
        &self,
        range: DateRange,
        page: usize,
        page_size: usize,
    ) -> Result<Paginated<Expense>> {
        paginate(&self.by_date_range(range), page, page_size)
    }

    /// Exact category match.
    pub fn by_category(&self, category: &str) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    pub fn by_category_page(
        &self,
        category: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Paginated<Expense>> {
        paginate(&self.by_category(category), page, page_size)
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Assign a fresh id and prepend, so default ordering stays
    /// most-recently-added-first. Returns the stored record.
    pub fn add(&mut self, mut expense: Expense) -> Expense {
        expense.id = Some(format!("exp-{}", self.next_id));
        self.next_id += 1;
        self.expenses.insert(0, expense.clone());
        expense
    }

    /// Merge the `Some` fields of `patch` into the expense with `id`.
    /// The id itself never changes.
    pub fn update(&mut self, id: &str, patch: ExpensePatch) -> Result<Expense> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| OutlayError::NotFound(format!("expense {id}")))?;

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(note) = patch.note {
            expense.note = note;
        }
        Ok(expense.clone())
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| OutlayError::NotFound(format!("expense {id}")))?;
        self.expenses.remove(index);
        Ok(())
    }

    // ── Aggregation ───────────────────────────────────────────

    /// Sum of amounts, optionally restricted to an inclusive window.
    /// Zero for the empty set.
    pub fn total(&self, range: Option<DateRange>) -> Decimal {
        self.expenses
            .iter()
            .filter(|e| in_range(e, range))
            .map(|e| e.amount)
            .sum()
    }

    /// Per-category sums within the optional window, one row per distinct
    /// category, in first-seen aggregation order.
    pub fn category_summary(&self, range: Option<DateRange>) -> Vec<CategoryTotal> {
        let mut summary: Vec<CategoryTotal> = Vec::new();
        for expense in self.expenses.iter().filter(|e| in_range(e, range)) {
            match summary.iter_mut().find(|t| t.category == expense.category) {
                Some(row) => row.amount += expense.amount,
                None => summary.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                }),
            }
        }
        summary
    }

    /// Spending per calendar month of `year`. Always exactly 12 entries,
    /// zero-filled for months with no expenses.
    pub fn monthly_totals(&self, year: i32) -> Vec<MonthlyTotal> {
        let mut totals = [Decimal::ZERO; 12];
        for expense in &self.expenses {
            if expense.date.year() == year {
                totals[expense.date.month0() as usize] += expense.amount;
            }
        }
        totals
            .into_iter()
            .zip(MONTH_LABELS)
            .map(|(total, month)| MonthlyTotal { month, total })
            .collect()
    }
}

fn in_range(expense: &Expense, range: Option<DateRange>) -> bool {
    range.is_none_or(|r| r.contains(expense.date))
}
