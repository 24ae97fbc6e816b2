use rust_decimal::Decimal;
use thiserror::Error;

/// Raised when an income, expense, or subscription fails its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    NonPositiveAmount { field: &'static str },
    #[error("{field} must not exceed {max}")]
    AmountTooLarge { field: &'static str, max: Decimal },
    #[error("{field} must not be empty")]
    BlankText { field: &'static str },
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// Error type that captures snapshot import/export failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures that end the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
