pub mod filter_service;
pub mod summary_service;

pub use filter_service::{EntryLine, FilterService};
pub use summary_service::{CategoryShare, MonthlyReport, SummaryService};
