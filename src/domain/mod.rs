//! Entity types owned by the ledger aggregate.

pub mod category;
pub mod common;
pub mod notification;
pub mod transaction;

pub use category::Category;
pub use notification::Notification;
pub use transaction::{Transaction, TransactionKind};
