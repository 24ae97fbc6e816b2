use chrono::NaiveDate;
use finance_tracker::ledger::{Category, Expense, Income, Ledger, Subscription};
use rust_decimal::Decimal;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The May 2024 ledger used across report and snapshot tests.
pub fn may_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_income(Income::new(date(2024, 5, 1), "Salary", Decimal::from(100)).unwrap());
    ledger.add_expense(
        Expense::new(date(2024, 5, 2), Category::Food, Decimal::from(40), "groceries").unwrap(),
    );
    ledger.add_expense(
        Expense::new(date(2024, 5, 15), Category::Fun, Decimal::from(20), "cinema").unwrap(),
    );
    ledger.add_subscription(
        Subscription::new("Streaming", Decimal::from(10), date(2024, 1, 10), true).unwrap(),
    );
    ledger
}
