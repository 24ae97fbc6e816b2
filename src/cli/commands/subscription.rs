use crate::cli::{
    formatting, io,
    menus::sub_menu_line,
    output,
    shell_context::{CommandResult, ShellContext},
};
use crate::ledger::{EntryKind, Subscription};

pub fn run(context: &mut ShellContext) -> CommandResult {
    output::info(sub_menu_line(&[
        "Add subscription",
        "List subscriptions",
        "Toggle active/inactive",
        "Delete",
    ]));
    let choice = io::read_choice(context.input.as_mut(), "Choice: ")?;
    match choice.as_str() {
        "1" => add(context),
        "2" => {
            list(context, false);
            Ok(())
        }
        "3" => {
            list(context, true);
            toggle(context)
        }
        "4" => {
            list(context, true);
            super::delete_entry(context, EntryKind::Subscription)
        }
        _ => {
            output::warning("Invalid choice");
            Ok(())
        }
    }
}

/// New subscriptions start out active.
fn add(context: &mut ShellContext) -> CommandResult {
    let input = context.input.as_mut();
    let name = io::read_text(input, "Name: ")?;
    let price = io::read_amount(input, "Monthly price: ")?;
    let start = io::read_date(input, "Start date: ")?;
    context
        .ledger
        .add_subscription(Subscription::new(name, price, start, true)?);
    output::success("Subscription added.");
    Ok(())
}

fn toggle(context: &mut ShellContext) -> CommandResult {
    let Some(index) = io::read_index(context.input.as_mut())? else {
        return Ok(());
    };
    if let Some(active) = context.ledger.toggle_subscription(index) {
        output::success(format!(
            "Subscription is now {}.",
            formatting::active_label(active).to_lowercase()
        ));
    }
    Ok(())
}

fn list(context: &ShellContext, indexed: bool) {
    if context.ledger.subscriptions().is_empty() {
        output::info("No subscriptions recorded.");
        return;
    }
    for (idx, sub) in context.ledger.subscriptions().iter().enumerate() {
        let line = format!(
            "{} {}/month since {} {}",
            sub.name(),
            context.money(sub.monthly_price()),
            formatting::date(sub.start_date()),
            formatting::active_label(sub.is_active())
        );
        if indexed {
            output::info(format!("{idx}) {line}"));
        } else {
            output::info(line);
        }
    }
}
