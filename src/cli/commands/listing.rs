use crate::cli::{
    formatting, io,
    menus::sub_menu_line,
    output,
    shell_context::{CommandResult, ShellContext},
};
use crate::core::services::FilterService;

pub fn show_all(context: &ShellContext) {
    output::section("All entries, newest first");
    let lines = FilterService::all_entries_descending(&context.ledger);
    if lines.is_empty() {
        output::info("Nothing recorded yet.");
        return;
    }
    for line in lines {
        output::info(format!(
            "{} {} {}",
            formatting::date(line.date),
            line.kind,
            line.description
        ));
    }
}

pub fn filters(context: &mut ShellContext) -> CommandResult {
    output::info(sub_menu_line(&["Expenses by category", "Expenses by date range"]));
    let input = context.input.as_mut();
    let choice = io::read_choice(input, "Choice: ")?;
    let total = match choice.as_str() {
        "1" => {
            let category = io::read_category(input)?;
            FilterService::sum_by_category(&context.ledger, category)
        }
        "2" => {
            let from = io::read_date(input, "From: ")?;
            let to = io::read_date(input, "To: ")?;
            FilterService::sum_by_date_range(&context.ledger, from, to)
        }
        _ => {
            output::warning("Invalid choice");
            return Ok(());
        }
    };
    output::info(format!("Total: {}", context.money(total)));
    Ok(())
}
