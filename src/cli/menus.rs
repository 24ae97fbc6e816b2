//! Numeric menu definitions.

use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Incomes,
    Expenses,
    Subscriptions,
    AllEntries,
    Filters,
    MonthlyReport,
    Snapshot,
    Exit,
}

struct MenuEntry {
    key: &'static str,
    choice: MainChoice,
    description: &'static str,
}

const MAIN_MENU: [MenuEntry; 8] = [
    MenuEntry {
        key: "1",
        choice: MainChoice::Incomes,
        description: "Incomes",
    },
    MenuEntry {
        key: "2",
        choice: MainChoice::Expenses,
        description: "Expenses",
    },
    MenuEntry {
        key: "3",
        choice: MainChoice::Subscriptions,
        description: "Subscriptions",
    },
    MenuEntry {
        key: "4",
        choice: MainChoice::AllEntries,
        description: "All entries",
    },
    MenuEntry {
        key: "5",
        choice: MainChoice::Filters,
        description: "Filters",
    },
    MenuEntry {
        key: "6",
        choice: MainChoice::MonthlyReport,
        description: "Monthly report",
    },
    MenuEntry {
        key: "7",
        choice: MainChoice::Snapshot,
        description: "Import/Export JSON",
    },
    MenuEntry {
        key: "0",
        choice: MainChoice::Exit,
        description: "Exit",
    },
];

impl MainChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        MAIN_MENU
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.choice)
    }
}

pub fn print_main_menu() {
    output::section("Personal finance tracker");
    for entry in MAIN_MENU.iter() {
        output::info(format!("{}) {}", entry.key, entry.description));
    }
}

/// Renders a one-line sub-menu such as `1) Add 2) List 3) Delete`.
pub fn sub_menu_line(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(idx, label)| format!("{}) {}", idx + 1, label))
        .collect::<Vec<_>>()
        .join(" ")
}
