//! The ledger aggregate: transactions, categories, notifications, and the
//! running totals, together with every mutation rule the tracker allows.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{Category, Notification, Transaction};
use crate::errors::LedgerError;

/// Hard cap on stored transactions.
pub const MAX_TRANSACTIONS: usize = 1000;
/// Hard cap on categories; the seed set uses 8 of these.
pub const MAX_CATEGORIES: usize = 50;
/// Notification log capacity; the oldest entry is evicted once full.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Categories seeded by [`Ledger::initialize`], in presentation order.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Salary",
    "Freelance",
    "Investments",
    "Food",
    "Transport",
    "Utilities",
    "Rent",
    "Entertainment",
];

const INIT_MESSAGE: &str = "Tracker initialized with default categories.";

/// Result of a successful expense recording.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseOutcome {
    pub transaction_id: Uuid,
    /// Name of the category the expense was recorded against.
    pub category: String,
    /// True when the category has a limit and this expense pushed spending
    /// past it.
    pub budget_exceeded: bool,
}

/// In-memory aggregate owning all tracker state for one session.
///
/// Fields stay private so the totals can never drift from the transaction
/// history: `total_income` always equals the sum of income amounts,
/// `total_expenses` the sum of expense amounts, and the categories'
/// `current_spent` values add up to `total_expenses`.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    notifications: Vec<Notification>,
    total_income: f64,
    total_expenses: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a ledger already seeded with the default categories.
    pub fn new() -> Self {
        let mut ledger = Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            notifications: Vec::new(),
            total_income: 0.0,
            total_expenses: 0.0,
        };
        ledger.initialize();
        ledger
    }

    /// Resets every collection and counter, reseeds the default categories,
    /// and logs one initialization notification.
    pub fn initialize(&mut self) {
        self.transactions.clear();
        self.categories.clear();
        self.notifications.clear();
        self.total_income = 0.0;
        self.total_expenses = 0.0;
        for name in DEFAULT_CATEGORIES {
            self.categories.push(Category::new(name));
        }
        self.push_notification(INIT_MESSAGE);
        info!(categories = self.categories.len(), "tracker initialized");
    }

    /// Records an income entry and returns the new transaction's id.
    ///
    /// `amount` must already be validated as a positive, finite number; the
    /// prompt layer owns input parsing.
    pub fn record_income(&mut self, amount: f64, description: &str) -> Result<Uuid, LedgerError> {
        self.ensure_transaction_capacity()?;
        let transaction = Transaction::income(amount, description);
        let id = transaction.id;
        self.total_income += amount;
        self.transactions.push(transaction);
        debug!(%id, amount, "income recorded");
        Ok(id)
    }

    /// Records an expense against the category at the 1-based `selection`.
    ///
    /// The selection is validated before any state changes: an out-of-range
    /// value leaves totals, categories, and the transaction list untouched.
    /// On success the outcome reports whether a non-zero budget limit is now
    /// strictly exceeded; persisting that warning is the caller's choice.
    pub fn record_expense(
        &mut self,
        amount: f64,
        selection: usize,
        description: &str,
    ) -> Result<ExpenseOutcome, LedgerError> {
        self.ensure_transaction_capacity()?;
        let (name, budget_exceeded) = {
            let category = self.category_at_mut(selection)?;
            category.current_spent += amount;
            (category.name.clone(), category.limit_exceeded())
        };

        let transaction = Transaction::expense(amount, name.clone(), description);
        let transaction_id = transaction.id;
        self.total_expenses += amount;
        self.transactions.push(transaction);

        if budget_exceeded {
            warn!(category = %name, amount, "budget limit exceeded");
        }
        debug!(%transaction_id, amount, category = %name, "expense recorded");
        Ok(ExpenseOutcome {
            transaction_id,
            category: name,
            budget_exceeded,
        })
    }

    /// Replaces the budget limit of the category at the 1-based `selection`.
    ///
    /// `new_limit` must already be validated as non-negative; zero clears the
    /// limit. A limit below `current_spent` is accepted and flags the next
    /// expense recorded against the category.
    pub fn set_budget_limit(&mut self, selection: usize, new_limit: f64) -> Result<(), LedgerError> {
        let category = self.category_at_mut(selection)?;
        category.budget_limit = new_limit;
        debug!(category = %category.name, new_limit, "budget limit updated");
        Ok(())
    }

    /// Appends a notification, evicting the oldest entry once the log is full.
    pub fn push_notification(&mut self, message: &str) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
        self.notifications.push(Notification::new(message));
    }

    /// Marks every stored notification as read, returning how many changed.
    pub fn mark_notifications_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in &mut self.notifications {
            if !notification.is_read {
                notification.mark_read();
                changed += 1;
            }
        }
        changed
    }

    /// Number of notifications not yet seen through the notifications view.
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// All transactions in insertion (chronological) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All categories, defaults first in their fixed seed order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All stored notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    /// Net position across the whole session.
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// True once the transaction store cannot accept another entry.
    pub fn transactions_full(&self) -> bool {
        self.transactions.len() >= MAX_TRANSACTIONS
    }

    fn ensure_transaction_capacity(&self) -> Result<(), LedgerError> {
        if self.transactions_full() {
            return Err(LedgerError::CapacityExceeded {
                limit: MAX_TRANSACTIONS,
            });
        }
        Ok(())
    }

    fn category_at_mut(&mut self, selection: usize) -> Result<&mut Category, LedgerError> {
        if selection == 0 || selection > self.categories.len() {
            return Err(LedgerError::InvalidCategory {
                selection,
                available: self.categories.len(),
            });
        }
        Ok(&mut self.categories[selection - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::INCOME_CATEGORY;

    fn position_of(ledger: &Ledger, name: &str) -> usize {
        ledger
            .categories()
            .iter()
            .position(|category| category.name == name)
            .map(|index| index + 1)
            .expect("seeded category")
    }

    #[test]
    fn initialize_seeds_default_state() {
        let ledger = Ledger::new();
        let names: Vec<&str> = ledger
            .categories()
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
        assert!(ledger
            .categories()
            .iter()
            .all(|category| category.budget_limit == 0.0 && category.current_spent == 0.0));
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.notifications().len(), 1);
        assert_eq!(ledger.notifications()[0].message, INIT_MESSAGE);
        assert_eq!(ledger.total_income(), 0.0);
        assert_eq!(ledger.total_expenses(), 0.0);
    }

    #[test]
    fn initialize_resets_accumulated_state() {
        let mut ledger = Ledger::new();
        ledger.record_income(100.0, "pay").unwrap();
        ledger.record_expense(40.0, 4, "groceries").unwrap();
        ledger.push_notification("extra");

        ledger.initialize();
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.notifications().len(), 1);
        assert_eq!(ledger.total_income(), 0.0);
        assert_eq!(ledger.total_expenses(), 0.0);
        assert!(ledger
            .categories()
            .iter()
            .all(|category| category.current_spent == 0.0));
    }

    #[test]
    fn record_income_updates_totals_and_history() {
        let mut ledger = Ledger::new();
        let id = ledger.record_income(50.0, "bonus").unwrap();

        assert_eq!(ledger.total_income(), 50.0);
        assert_eq!(ledger.transactions().len(), 1);
        let transaction = &ledger.transactions()[0];
        assert_eq!(transaction.id, id);
        assert!(transaction.is_income());
        assert_eq!(transaction.category, INCOME_CATEGORY);
        assert_eq!(transaction.description, "bonus");
    }

    #[test]
    fn record_expense_updates_three_places_consistently() {
        let mut ledger = Ledger::new();
        let outcome = ledger.record_expense(30.0, 1, "test").unwrap();

        assert_eq!(outcome.category, "Salary");
        assert!(!outcome.budget_exceeded);
        assert_eq!(ledger.total_expenses(), 30.0);
        assert_eq!(ledger.categories()[0].current_spent, 30.0);
        assert_eq!(ledger.transactions().len(), 1);
        let transaction = &ledger.transactions()[0];
        assert_eq!(transaction.category, "Salary");
        assert!(!transaction.is_income());
    }

    #[test]
    fn expense_past_limit_reports_budget_exceeded() {
        let mut ledger = Ledger::new();
        let food = position_of(&ledger, "Food");
        ledger.set_budget_limit(food, 100.0).unwrap();
        let within = ledger.record_expense(90.0, food, "groceries").unwrap();
        assert!(!within.budget_exceeded);

        let over = ledger.record_expense(20.0, food, "more groceries").unwrap();
        assert!(over.budget_exceeded);
        assert_eq!(over.category, "Food");
        assert_eq!(ledger.categories()[food - 1].current_spent, 110.0);
    }

    #[test]
    fn unlimited_categories_never_flag() {
        let mut ledger = Ledger::new();
        let outcome = ledger.record_expense(10_000.0, 8, "splurge").unwrap();
        assert!(!outcome.budget_exceeded);
    }

    #[test]
    fn limit_below_accumulated_spend_flags_next_expense() {
        let mut ledger = Ledger::new();
        let rent = position_of(&ledger, "Rent");
        ledger.record_expense(50.0, rent, "deposit").unwrap();
        ledger.set_budget_limit(rent, 20.0).unwrap();

        let outcome = ledger.record_expense(1.0, rent, "keys").unwrap();
        assert!(outcome.budget_exceeded);
    }

    #[test]
    fn invalid_selection_leaves_state_untouched() {
        let mut ledger = Ledger::new();
        let available = ledger.categories().len();
        for selection in [0, available + 1] {
            let err = ledger.record_expense(10.0, selection, "nope").unwrap_err();
            assert_eq!(
                err,
                LedgerError::InvalidCategory {
                    selection,
                    available
                }
            );
        }
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.total_expenses(), 0.0);
        assert!(ledger
            .categories()
            .iter()
            .all(|category| category.current_spent == 0.0));

        let err = ledger.set_budget_limit(0, 10.0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCategory { .. }));
    }

    #[test]
    fn transaction_capacity_is_enforced() {
        let mut ledger = Ledger::new();
        for index in 0..MAX_TRANSACTIONS {
            if index % 2 == 0 {
                ledger.record_income(1.0, "in").unwrap();
            } else {
                ledger.record_expense(1.0, 1, "out").unwrap();
            }
        }
        assert!(ledger.transactions_full());

        let err = ledger.record_income(1.0, "overflow").unwrap_err();
        assert_eq!(
            err,
            LedgerError::CapacityExceeded {
                limit: MAX_TRANSACTIONS
            }
        );
        let err = ledger.record_expense(1.0, 1, "overflow").unwrap_err();
        assert_eq!(
            err,
            LedgerError::CapacityExceeded {
                limit: MAX_TRANSACTIONS
            }
        );
        assert_eq!(ledger.transactions().len(), MAX_TRANSACTIONS);
    }

    #[test]
    fn notification_log_evicts_oldest_first() {
        let mut ledger = Ledger::new();
        // The seed notification plus 51 pushes overflows the ring twice.
        for index in 0..=MAX_NOTIFICATIONS {
            ledger.push_notification(&format!("note {index}"));
        }

        assert_eq!(ledger.notifications().len(), MAX_NOTIFICATIONS);
        assert!(ledger
            .notifications()
            .iter()
            .all(|notification| notification.message != INIT_MESSAGE));
        assert_eq!(ledger.notifications()[0].message, "note 1");
        assert_eq!(
            ledger.notifications()[MAX_NOTIFICATIONS - 1].message,
            format!("note {MAX_NOTIFICATIONS}")
        );
    }

    #[test]
    fn notifications_track_read_state() {
        let mut ledger = Ledger::new();
        ledger.push_notification("first");
        assert_eq!(ledger.unread_notifications(), 2);

        assert_eq!(ledger.mark_notifications_read(), 2);
        assert_eq!(ledger.unread_notifications(), 0);

        ledger.push_notification("second");
        assert_eq!(ledger.unread_notifications(), 1);
        assert_eq!(ledger.mark_notifications_read(), 1);
    }
}
