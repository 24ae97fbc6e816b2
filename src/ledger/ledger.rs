use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::{expense::Expense, income::Income, subscription::Subscription};

/// Identifies one of the three lists held by a [`Ledger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
    Subscription,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
            EntryKind::Subscription => "Subscription",
        };
        f.write_str(label)
    }
}

/// In-memory record of incomes, expenses, and subscriptions.
///
/// Insertion order is preserved and drives index-based removal. Every entity
/// was validated when it was built, so the ledger never re-checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default, deserialize_with = "null_as_empty")]
    incomes: Vec<Income>,
    #[serde(default, deserialize_with = "null_as_empty")]
    expenses: Vec<Expense>,
    #[serde(default, deserialize_with = "null_as_empty")]
    subscriptions: Vec<Subscription>,
}

/// A list written as `null` reads the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Borrowed view over every list in a ledger.
#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'a> {
    pub incomes: &'a [Income],
    pub expenses: &'a [Expense],
    pub subscriptions: &'a [Subscription],
}

/// An entity detached from the ledger by [`Ledger::remove_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovedEntry {
    Income(Income),
    Expense(Expense),
    Subscription(Subscription),
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_income(&mut self, income: Income) {
        self.incomes.push(income);
        debug!(count = self.incomes.len(), "income added");
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        debug!(count = self.expenses.len(), "expense added");
    }

    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
        debug!(count = self.subscriptions.len(), "subscription added");
    }

    /// Removes the entry at `index` of the chosen list.
    ///
    /// An out-of-range index leaves the ledger untouched and returns `None`.
    pub fn remove_at(&mut self, kind: EntryKind, index: usize) -> Option<RemovedEntry> {
        let removed = match kind {
            EntryKind::Income => {
                (index < self.incomes.len()).then(|| RemovedEntry::Income(self.incomes.remove(index)))
            }
            EntryKind::Expense => (index < self.expenses.len())
                .then(|| RemovedEntry::Expense(self.expenses.remove(index))),
            EntryKind::Subscription => (index < self.subscriptions.len())
                .then(|| RemovedEntry::Subscription(self.subscriptions.remove(index))),
        };
        match removed {
            Some(_) => debug!(%kind, index, "entry removed"),
            None => debug!(%kind, index, "remove ignored, index out of range"),
        }
        removed
    }

    /// Flips the active flag of the subscription at `index`, returning the new state.
    pub fn toggle_subscription(&mut self, index: usize) -> Option<bool> {
        let state = self.subscriptions.get_mut(index).map(Subscription::toggle);
        debug!(index, ?state, "subscription toggle");
        state
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn all(&self) -> LedgerView<'_> {
        LedgerView {
            incomes: &self.incomes,
            expenses: &self.expenses,
            subscriptions: &self.subscriptions,
        }
    }

    pub fn len(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Income => self.incomes.len(),
            EntryKind::Expense => self.expenses.len(),
            EntryKind::Subscription => self.subscriptions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty() && self.subscriptions.is_empty()
    }

    /// Swaps in all three lists from `other` at once.
    pub fn replace_with(&mut self, other: Ledger) {
        *self = other;
    }
}
