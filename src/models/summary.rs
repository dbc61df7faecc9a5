use rust_decimal::Decimal;

/// One row of a per-category spending summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

impl std::fmt::Display for CategoryTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.category,
            crate::format::format_amount(self.amount)
        )
    }
}

/// One calendar month of a year's spending trend. Always produced in sets of
/// twelve, zero-filled for months with no expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// Short label, "Jan" through "Dec".
    pub month: &'static str,
    pub total: Decimal,
}
