use crate::cli::{
    formatting, io,
    menus::sub_menu_line,
    output,
    shell_context::{CommandResult, ShellContext},
};
use crate::ledger::{EntryKind, Income};

pub fn run(context: &mut ShellContext) -> CommandResult {
    output::info(sub_menu_line(&["Add income", "List incomes", "Delete"]));
    let choice = io::read_choice(context.input.as_mut(), "Choice: ")?;
    match choice.as_str() {
        "1" => add(context),
        "2" => {
            list(context, false);
            Ok(())
        }
        "3" => {
            list(context, true);
            super::delete_entry(context, EntryKind::Income)
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
    let source = io::read_text(input, "Source: ")?;
    let amount = io::read_amount(input, "Amount: ")?;
    context.ledger.add_income(Income::new(date, source, amount)?);
    output::success("Income added.");
    Ok(())
}

fn list(context: &ShellContext, indexed: bool) {
    if context.ledger.incomes().is_empty() {
        output::info("No incomes recorded.");
        return;
    }
    for (idx, income) in context.ledger.incomes().iter().enumerate() {
        let line = format!(
            "{} {} {}",
            formatting::date(income.date()),
            income.source(),
            context.money(income.amount())
        );
        if indexed {
            output::info(format!("{idx}) {line}"));
        } else {
            output::info(line);
        }
    }
}
