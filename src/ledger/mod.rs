//! Validated entities and the in-memory ledger that owns them.

pub mod category;
pub mod expense;
pub mod income;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod rules;
pub mod subscription;

pub use category::Category;
pub use expense::Expense;
pub use income::Income;
pub use ledger::{EntryKind, Ledger, LedgerView, RemovedEntry};
pub use rules::MAX_AMOUNT;
pub use subscription::Subscription;
