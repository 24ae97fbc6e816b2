use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::rules::{require_positive, require_text};
use crate::errors::ValidationError;

/// Money spent on a given day, tagged with a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord")]
pub struct Expense {
    date: NaiveDate,
    category: Category,
    amount: Decimal,
    note: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        note: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let note = note.into();
        require_positive("amount", amount)?;
        require_text("note", &note)?;
        Ok(Self {
            date,
            category,
            amount,
            note,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

#[derive(Deserialize)]
struct ExpenseRecord {
    date: NaiveDate,
    category: Category,
    amount: Decimal,
    note: String,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ValidationError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Expense::new(record.date, record.category, record.amount, record.note)
    }
}
