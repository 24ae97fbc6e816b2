use std::path::PathBuf;

use crate::cli::{
    io,
    menus::sub_menu_line,
    output,
    shell_context::{CommandError, CommandResult, ShellContext},
};
use crate::storage::{self, ImportSummary};

pub fn run(context: &mut ShellContext) -> CommandResult {
    output::info(sub_menu_line(&[
        "Export",
        "Import",
        "Export to file",
        "Import from file",
    ]));
    let choice = io::read_choice(context.input.as_mut(), "Choice: ")?;
    match choice.as_str() {
        "1" => export(context),
        "2" => import(context),
        "3" => export_to_file(context),
        "4" => import_from_file(context),
        _ => {
            output::warning("Invalid choice");
            Ok(())
        }
    }
}

fn export(context: &ShellContext) -> CommandResult {
    output::info(storage::export_json(&context.ledger)?);
    Ok(())
}

fn import(context: &mut ShellContext) -> CommandResult {
    output::info("Paste the JSON document on a single line:");
    let text = io::read_line(context.input.as_mut(), "")?;
    if text.trim().is_empty() {
        output::info("Empty input, import cancelled.");
        return Ok(());
    }
    let summary = storage::import_json(&mut context.ledger, &text)?;
    report_import(summary);
    Ok(())
}

fn export_to_file(context: &mut ShellContext) -> CommandResult {
    let path = ask_path(context)?;
    storage::save_ledger_to_path(&context.ledger, &path)?;
    output::success(format!("Saved to {}.", path.display()));
    Ok(())
}

fn import_from_file(context: &mut ShellContext) -> CommandResult {
    let path = ask_path(context)?;
    let summary = storage::import_from_path(&mut context.ledger, &path)?;
    report_import(summary);
    Ok(())
}

fn ask_path(context: &mut ShellContext) -> Result<PathBuf, CommandError> {
    let prompt = format!(
        "File path [{}]: ",
        context.config.default_snapshot_path.display()
    );
    let raw = io::read_line(context.input.as_mut(), &prompt)?;
    Ok(context.config.snapshot_path(&raw))
}

fn report_import(summary: ImportSummary) {
    output::success(format!(
        "Imported {} incomes, {} expenses, {} subscriptions.",
        summary.incomes, summary.expenses, summary.subscriptions
    ));
}
