use crate::cli::{
    formatting, io,
    menus::sub_menu_line,
    output,
    shell_context::{CommandResult, ShellContext},
};
use crate::ledger::{EntryKind, Expense};

pub fn run(context: &mut ShellContext) -> CommandResult {
    output::info(sub_menu_line(&["Add expense", "List expenses", "Delete"]));
    let choice = io::read_choice(context.input.as_mut(), "Choice: ")?;
    match choice.as_str() {
        "1" => add(context),
        "2" => {
            list(context, false);
            Ok(())
        }
        "3" => {
            list(context, true);
            super::delete_entry(context, EntryKind::Expense)
        }
        _ => {
            output::warning("Invalid choice");
            Ok(())
        }
    }
}

fn add(context: &mut ShellContext) -> CommandResult {
    let input = context.input.as_mut();
    let date = io::read_date(input, "Date: ")?;
    let category = io::read_category(input)?;
    let amount = io::read_amount(input, "Amount: ")?;
    let note = io::read_text(input, "Note: ")?;
    context
        .ledger
        .add_expense(Expense::new(date, category, amount, note)?);
    output::success("Expense added.");
    Ok(())
}

fn list(context: &ShellContext, indexed: bool) {
    if context.ledger.expenses().is_empty() {
        output::info("No expenses recorded.");
        return;
    }
    for (idx, expense) in context.ledger.expenses().iter().enumerate() {
        let line = format!(
            "{} {} {} {}",
            formatting::date(expense.date()),
            expense.category(),
            context.money(expense.amount()),
            expense.note()
        );
        if indexed {
            output::info(format!("{idx}) {line}"));
        } else {
            output::info(line);
        }
    }
}
