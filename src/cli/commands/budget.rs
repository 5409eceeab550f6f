use crate::cli::commands::label_and_amount;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;

const BUDGET_USAGE: &str = "budget <category> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budget",
            "Set a spending cap for a category",
            BUDGET_USAGE,
            cmd_budget,
        ),
        CommandEntry::new(
            "clear",
            "Remove all transactions or all budgets",
            "clear <transactions|budgets>",
            cmd_clear,
        ),
    ]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount) = label_and_amount(args, BUDGET_USAGE)?;
    let amount = TransactionService::parse_amount(amount)?;
    let budget = context.manager.add_budget(category, amount)?;
    io::print_success(format!(
        "Budget set: {} {}",
        budget.category,
        context.format_amount(budget.amount)
    ));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args
        .first()
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| CommandError::InvalidArguments("usage: clear <transactions|budgets>".into()))?;

    match target.as_str() {
        "transactions" => {
            if !context.confirm("Delete every income and expense?")? {
                io::print_info("Nothing cleared.");
                return Ok(());
            }
            let removed = context.manager.clear_incomes_and_expenses();
            io::print_success(format!("Cleared {} transaction(s).", removed));
        }
        "budgets" => {
            if !context.confirm("Delete every budget?")? {
                io::print_info("Nothing cleared.");
                return Ok(());
            }
            let removed = context.manager.clear_budgets();
            io::print_success(format!("Cleared {} budget(s).", removed));
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "cannot clear `{}`; expected `transactions` or `budgets`",
                other
            )))
        }
    }
    Ok(())
}
