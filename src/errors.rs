use thiserror::Error;

/// Error type that captures the recoverable ledger failures.
///
/// Every failed operation leaves the ledger exactly as it was; callers report
/// the message and return to the menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction limit of {limit} reached")]
    CapacityExceeded { limit: usize },
    #[error("invalid category selection {selection} (expected 1..={available})")]
    InvalidCategory { selection: usize, available: usize },
}
