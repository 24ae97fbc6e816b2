use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{Category, EntryKind, Ledger};

/// One row of the combined listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub description: String,
}

pub struct FilterService;

impl FilterService {
    /// All-time expense total for `category`.
    pub fn sum_by_category(ledger: &Ledger, category: Category) -> Decimal {
        ledger
            .expenses()
            .iter()
            .filter(|expense| expense.category() == category)
            .map(|expense| expense.amount())
            .sum()
    }

    /// Expense total for dates in `from..=to`. An inverted range sums to zero.
    pub fn sum_by_date_range(ledger: &Ledger, from: NaiveDate, to: NaiveDate) -> Decimal {
        ledger
            .expenses()
            .iter()
            .filter(|expense| (from..=to).contains(&expense.date()))
            .map(|expense| expense.amount())
            .sum()
    }

    /// Every entry, newest first. Subscriptions are dated by their start date.
    ///
    /// The sort is stable: equal dates keep incomes before expenses before
    /// subscriptions, each in insertion order.
    pub fn all_entries_descending(ledger: &Ledger) -> Vec<EntryLine> {
        let incomes = ledger.incomes().iter().map(|income| EntryLine {
            date: income.date(),
            kind: EntryKind::Income,
            description: format!("{} {}", income.source(), income.amount()),
        });
        let expenses = ledger.expenses().iter().map(|expense| EntryLine {
            date: expense.date(),
            kind: EntryKind::Expense,
            description: format!(
                "{} {} {}",
                expense.category(),
                expense.amount(),
                expense.note()
            ),
        });
        let subscriptions = ledger.subscriptions().iter().map(|sub| EntryLine {
            date: sub.start_date(),
            kind: EntryKind::Subscription,
            description: format!(
                "{} {} {}",
                sub.name(),
                sub.monthly_price(),
                if sub.is_active() { "active" } else { "inactive" }
            ),
        });

        let mut lines: Vec<EntryLine> = incomes.chain(expenses).chain(subscriptions).collect();
        lines.sort_by(|a, b| b.date.cmp(&a.date));
        lines
    }
}
