use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// `None` until the book assigns an id on insert.
    pub id: Option<String>,
    /// At most one budget exists per category; `BudgetBook::set` enforces this.
    pub category: String,
    pub limit: Decimal,
    pub description: String,
}

impl Budget {
    pub fn new(category: String, limit: Decimal, description: String) -> Self {
        Self {
            id: None,
            category,
            limit,
            description,
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.category,
            crate::format::format_amount(self.limit)
        )
    }
}
