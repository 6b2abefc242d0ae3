use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{clip_text, Displayable, Identifiable};

/// Longest free-text description stored on a transaction.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Category name assigned to every income entry.
pub const INCOME_CATEGORY: &str = "Income";

/// Discriminates income from expense entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// An immutable, timestamped income or expense record.
///
/// The timestamp is captured at construction and never changes; the ledger
/// offers no way to edit or remove a stored transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category: category.into(),
            description: clip_text(description, MAX_DESCRIPTION_LEN),
            timestamp: Utc::now(),
        }
    }

    /// Builds an income entry carrying the fixed [`INCOME_CATEGORY`] name.
    pub fn income(amount: f64, description: &str) -> Self {
        Self::new(TransactionKind::Income, amount, INCOME_CATEGORY, description)
    }

    /// Builds an expense entry against the named category.
    pub fn expense(amount: f64, category: impl Into<String>, description: &str) -> Self {
        Self::new(TransactionKind::Expense, amount, category, description)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ${:.2} ({})", self.kind, self.amount, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_entries_carry_the_fixed_category() {
        let transaction = Transaction::income(50.0, "bonus");
        assert!(transaction.is_income());
        assert_eq!(transaction.category, INCOME_CATEGORY);
    }

    #[test]
    fn overlong_descriptions_are_clipped() {
        let transaction = Transaction::expense(5.0, "Food", &"d".repeat(500));
        assert_eq!(transaction.description.chars().count(), MAX_DESCRIPTION_LEN);
    }
}
