use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rules::{require_positive, require_text};
use crate::errors::ValidationError;

/// Money received on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IncomeRecord")]
pub struct Income {
    date: NaiveDate,
    source: String,
    amount: Decimal,
}

impl Income {
    pub fn new(
        date: NaiveDate,
        source: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        let source = source.into();
        require_positive("amount", amount)?;
        require_text("source", &source)?;
        Ok(Self {
            date,
            source,
            amount,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Deserialize)]
struct IncomeRecord {
    date: NaiveDate,
    source: String,
    amount: Decimal,
}

impl TryFrom<IncomeRecord> for Income {
    type Error = ValidationError;

    fn try_from(record: IncomeRecord) -> Result<Self, Self::Error> {
        Income::new(record.date, record.source, record.amount)
    }
}
