use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rules::{require_positive, require_text};
use crate::errors::ValidationError;

/// A recurring monthly charge. Only the active flag changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SubscriptionRecord")]
pub struct Subscription {
    name: String,
    monthly_price: Decimal,
    start_date: NaiveDate,
    is_active: bool,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        monthly_price: Decimal,
        start_date: NaiveDate,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_positive("monthly price", monthly_price)?;
        require_text("name", &name)?;
        Ok(Self {
            name,
            monthly_price,
            start_date,
            is_active,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_price(&self) -> Decimal {
        self.monthly_price
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Flips the active flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionRecord {
    name: String,
    monthly_price: Decimal,
    start_date: NaiveDate,
    is_active: bool,
}

impl TryFrom<SubscriptionRecord> for Subscription {
    type Error = ValidationError;

    fn try_from(record: SubscriptionRecord) -> Result<Self, Self::Error> {
        Subscription::new(
            record.name,
            record.monthly_price,
            record.start_date,
            record.is_active,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn toggle_flips_active_flag() {
        let mut sub = Subscription::new("Music", dec!(4.99), start(), true).unwrap();
        assert!(!sub.toggle());
        assert!(!sub.is_active());
        assert!(sub.toggle());
    }

    #[test]
    fn rejects_zero_price_and_blank_name() {
        assert_eq!(
            Subscription::new("Music", dec!(0), start(), true).unwrap_err(),
            ValidationError::NonPositiveAmount {
                field: "monthly price"
            }
        );
        assert_eq!(
            Subscription::new("  ", dec!(1), start(), true).unwrap_err(),
            ValidationError::BlankText { field: "name" }
        );
    }

    #[test]
    fn uses_camel_case_field_names() {
        let sub = Subscription::new("Gym", dec!(20), start(), false).unwrap();
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["monthlyPrice"], "20");
        assert_eq!(json["startDate"], "2024-01-10");
        assert_eq!(json["isActive"], false);
    }
}
