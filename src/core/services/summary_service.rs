use rust_decimal::Decimal;

use crate::core::{
    time::YearMonth,
    utils::{percent, safe_divide},
};
use crate::ledger::{Category, Expense, Ledger};

/// Expense total and share for one category within a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Decimal,
    pub percent: Decimal,
}

/// Aggregate figures for a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub month: YearMonth,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub subscription_total: Decimal,
    pub net: Decimal,
    /// One entry per category, in [`Category::ALL`] order.
    pub categories: Vec<CategoryShare>,
    pub largest_expense: Option<Expense>,
    pub average_per_day: Decimal,
}

impl MonthlyReport {
    pub fn share(&self, category: Category) -> Option<&CategoryShare> {
        self.categories
            .iter()
            .find(|share| share.category == category)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the report for `month`.
    ///
    /// Every active subscription is charged in full regardless of its start
    /// date, so a subscription that starts after `month` still counts.
    pub fn monthly_report(ledger: &Ledger, month: YearMonth) -> MonthlyReport {
        let income_total: Decimal = ledger
            .incomes()
            .iter()
            .filter(|income| month.contains(income.date()))
            .map(|income| income.amount())
            .sum();

        let in_month: Vec<&Expense> = ledger
            .expenses()
            .iter()
            .filter(|expense| month.contains(expense.date()))
            .collect();
        let expense_total: Decimal = in_month.iter().map(|expense| expense.amount()).sum();

        let subscription_total: Decimal = ledger
            .subscriptions()
            .iter()
            .filter(|sub| sub.is_active())
            .map(|sub| sub.monthly_price())
            .sum();

        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let total: Decimal = in_month
                    .iter()
                    .filter(|expense| expense.category() == category)
                    .map(|expense| expense.amount())
                    .sum();
                CategoryShare {
                    category,
                    total,
                    percent: percent(total, expense_total),
                }
            })
            .collect();

        // Strictly-greater keeps the earliest entry among equal amounts.
        let largest_expense = in_month
            .iter()
            .copied()
            .reduce(|best, candidate| {
                if candidate.amount() > best.amount() {
                    candidate
                } else {
                    best
                }
            })
            .cloned();

        MonthlyReport {
            month,
            income_total,
            expense_total,
            subscription_total,
            net: income_total - expense_total - subscription_total,
            categories,
            largest_expense,
            average_per_day: safe_divide(expense_total, Decimal::from(month.days())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Income, Subscription};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn may() -> YearMonth {
        YearMonth::new(2024, 5).unwrap()
    }

    #[test]
    fn empty_ledger_reports_zeroes() {
        let report = SummaryService::monthly_report(&Ledger::new(), may());
        assert_eq!(report.expense_total, Decimal::ZERO);
        assert_eq!(report.net, Decimal::ZERO);
        assert_eq!(report.average_per_day, Decimal::ZERO);
        assert!(report.largest_expense.is_none());
        assert_eq!(report.categories.len(), Category::ALL.len());
        assert!(report.categories.iter().all(|s| s.percent.is_zero()));
    }

    #[test]
    fn entries_outside_month_are_ignored() {
        let mut ledger = Ledger::new();
        ledger.add_income(Income::new(date(2024, 4, 30), "Salary", dec!(500)).unwrap());
        ledger.add_expense(
            Expense::new(date(2024, 6, 1), Category::Food, dec!(9), "snack").unwrap(),
        );
        ledger.add_expense(
            Expense::new(date(2023, 5, 10), Category::Food, dec!(9), "snack").unwrap(),
        );
        let report = SummaryService::monthly_report(&ledger, may());
        assert_eq!(report.income_total, Decimal::ZERO);
        assert_eq!(report.expense_total, Decimal::ZERO);
    }

    #[test]
    fn future_active_subscription_is_still_charged() {
        let mut ledger = Ledger::new();
        ledger.add_subscription(
            Subscription::new("Later", dec!(7), date(2030, 1, 1), true).unwrap(),
        );
        ledger.add_subscription(
            Subscription::new("Paused", dec!(50), date(2020, 1, 1), false).unwrap(),
        );
        let report = SummaryService::monthly_report(&ledger, may());
        assert_eq!(report.subscription_total, dec!(7));
        assert_eq!(report.net, dec!(-7));
    }

    #[test]
    fn largest_expense_tie_prefers_first_inserted() {
        let mut ledger = Ledger::new();
        ledger.add_expense(
            Expense::new(date(2024, 5, 3), Category::Transport, dec!(30), "bus pass").unwrap(),
        );
        ledger.add_expense(
            Expense::new(date(2024, 5, 1), Category::School, dec!(30), "books").unwrap(),
        );
        ledger.add_expense(
            Expense::new(date(2024, 5, 2), Category::Fun, dec!(5), "arcade").unwrap(),
        );
        let report = SummaryService::monthly_report(&ledger, may());
        let largest = report.largest_expense.expect("largest expense");
        assert_eq!(largest.note(), "bus pass");
    }
}
