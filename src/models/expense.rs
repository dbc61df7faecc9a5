use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// `None` until the store assigns an id on add.
    pub id: Option<String>,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    /// Empty when the expense carries no note.
    pub note: String,
}

impl Expense {
    pub fn new(amount: Decimal, category: String, date: NaiveDate) -> Self {
        Self {
            id: None,
            amount,
            category,
            date,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = note;
        self
    }
}

/// Field set for a partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}
