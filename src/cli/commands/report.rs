use crate::cli::{
    formatting, io, output,
    shell_context::{CommandResult, ShellContext},
};
use crate::core::{services::SummaryService, YearMonth};

pub fn run(context: &mut ShellContext) -> CommandResult {
    let raw = io::read_choice(context.input.as_mut(), "Month (YYYY-MM): ")?;
    let month: YearMonth = match raw.parse() {
        Ok(month) => month,
        Err(err) => {
            output::warning(err);
            return Ok(());
        }
    };

    let report = SummaryService::monthly_report(&context.ledger, month);
    output::section(format!("Report {}", report.month));
    output::info(format!("Incomes: {}", context.money(report.income_total)));
    output::info(format!("Expenses: {}", context.money(report.expense_total)));
    output::info(format!(
        "Subscriptions: {}",
        context.money(report.subscription_total)
    ));
    output::info(format!("Net: {}", context.money(report.net)));
    for share in &report.categories {
        output::info(format!(
            "{}: {}",
            share.category,
            formatting::percent(share.percent)
        ));
    }
    if let Some(largest) = &report.largest_expense {
        output::info(format!(
            "Largest expense: {} {}",
            largest.category(),
            context.money(largest.amount())
        ));
    }
    output::info(format!(
        "Average per day: {}",
        context.money(report.average_per_day)
    ));
    Ok(())
}
