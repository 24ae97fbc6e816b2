//! Pure reporting and query services over a [`Ledger`](crate::ledger::Ledger).

pub mod services;
pub mod time;
pub mod utils;

pub use time::{ParseYearMonthError, YearMonth};
