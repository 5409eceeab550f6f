use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::ledger::normalize_category;

const CHART_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show totals, balance, budgets and goals",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "categories",
            "Show income and expense per category",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "chart",
            "Show how expenses split across categories",
            "chart",
            cmd_chart,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let overview = context.manager.overview();
    output_section("Summary");
    io::print_info(format!(
        "  Total income  : {}",
        context.format_amount(overview.total_income)
    ));
    io::print_info(format!(
        "  Total expense : {}",
        context.format_amount(overview.total_expense)
    ));
    io::print_info(format!(
        "  Balance       : {}",
        context.format_amount(overview.balance)
    ));
    io::print_info(format!(
        "  Budgets       : {} totalling {}",
        overview.budget_count,
        context.format_amount(overview.total_budgeted)
    ));
    io::print_info(format!(
        "  Goals         : {} totalling {}",
        overview.goal_count,
        context.format_amount(overview.total_goal_amount)
    ));

    for budget in context.manager.budgets() {
        if let Some(remaining) = context.manager.remaining_budget(&budget.category) {
            io::print_info(format!(
                "  Budget {:<14} {} left of {}",
                normalize_category(&budget.category),
                context.format_amount(remaining),
                context.format_amount(budget.amount)
            ));
        }
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Categories");
    let rows = context.manager.category_summaries();
    if rows.is_empty() {
        io::print_info("No transactions yet.");
        return Ok(());
    }
    io::print_info(format!(
        "  {:<20} {:>14} {:>14}  {}",
        "Category", "Income", "Expense", "Last activity"
    ));
    for row in rows {
        let latest = row
            .latest_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".into());
        io::print_info(format!(
            "  {:<20} {:>14} {:>14}  {}",
            row.category,
            context.format_amount(row.income),
            context.format_amount(row.expense),
            latest
        ));
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Expenses by category");
    let shares = context.manager.expense_breakdown();
    if shares.is_empty() {
        io::print_info("No expenses yet.");
        return Ok(());
    }
    for share in shares {
        let filled = ((share.percent / 100.0) * CHART_WIDTH as f64).round() as usize;
        io::print_info(format!(
            "  {:<20} {:<width$} {:>5.1}%  {}",
            normalize_category(&share.category),
            "#".repeat(filled.min(CHART_WIDTH)),
            share.percent,
            context.format_amount(share.amount),
            width = CHART_WIDTH
        ));
    }
    Ok(())
}
