use crate::cli::commands::label_and_amount;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;

const INCOME_USAGE: &str = "income <category> <amount>";
const EXPENSE_USAGE: &str = "expense <category> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Record an income", INCOME_USAGE, cmd_income),
        CommandEntry::new(
            "expense",
            "Record an expense if funds and budget allow",
            EXPENSE_USAGE,
            cmd_expense,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount) = label_and_amount(args, INCOME_USAGE)?;
    let amount = TransactionService::parse_amount(amount)?;
    let income = context.manager.add_income(category, amount)?;
    io::print_success(format!(
        "Income recorded: {} {}",
        income.category,
        context.format_amount(income.amount)
    ));
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount) = label_and_amount(args, EXPENSE_USAGE)?;
    let amount = TransactionService::parse_amount(amount)?;
    let expense = context.manager.add_expense(category, amount)?;
    io::print_success(format!(
        "Expense recorded: {} {}",
        expense.category,
        context.format_amount(expense.amount)
    ));
    if let Some(remaining) = context.manager.remaining_budget(&expense.category) {
        io::print_info(format!(
            "Remaining budget for {}: {}",
            expense.display_category(),
            context.format_amount(remaining)
        ));
    }
    io::print_info(format!(
        "Available funds: {}",
        context.format_amount(context.manager.available_funds())
    ));
    Ok(())
}
