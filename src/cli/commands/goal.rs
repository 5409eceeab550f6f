use crate::cli::commands::label_and_amount;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;

const GOAL_USAGE: &str = "goal <name> <amount>";
const ACHIEVE_USAGE: &str = "achieve <index|all>";
const DELETE_USAGE: &str = "delete-goal <index|all>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("goal", "Add a savings goal", GOAL_USAGE, cmd_goal),
        CommandEntry::new("goals", "List open savings goals", "goals", cmd_goals),
        CommandEntry::new(
            "achieve",
            "Settle a goal (or all affordable goals) as an expense",
            ACHIEVE_USAGE,
            cmd_achieve,
        ),
        CommandEntry::new(
            "delete-goal",
            "Drop a goal without spending",
            DELETE_USAGE,
            cmd_delete_goal,
        ),
    ]
}

enum GoalTarget {
    All,
    Index(usize),
}

/// Reads `all` or a 1-based goal position.
fn parse_target(args: &[&str], usage: &str) -> Result<GoalTarget, CommandError> {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", usage)));
    };
    if raw.eq_ignore_ascii_case("all") {
        return Ok(GoalTarget::All);
    }
    match raw.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(GoalTarget::Index(position - 1)),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a goal number; use `goals` to list them",
            raw
        ))),
    }
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, amount) = label_and_amount(args, GOAL_USAGE)?;
    let amount = TransactionService::parse_amount(amount)?;
    let goal = context.manager.add_goal(name, amount)?;
    io::print_success(format!(
        "Goal added: {} {}",
        goal.name,
        context.format_amount(goal.amount)
    ));
    Ok(())
}

fn cmd_goals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Goals");
    let goals = context.manager.goals();
    if goals.is_empty() {
        io::print_info("No goals yet.");
        return Ok(());
    }
    let available = context.manager.available_funds();
    for (position, goal) in goals.iter().enumerate() {
        let marker = if goal.amount <= available { "" } else { "  (not yet affordable)" };
        io::print_info(format!(
            "  {:>2}. {:<20} {}{}",
            position + 1,
            goal.name,
            context.format_amount(goal.amount),
            marker
        ));
    }
    io::print_info(format!(
        "Available funds: {}",
        context.format_amount(available)
    ));
    Ok(())
}

fn cmd_achieve(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match parse_target(args, ACHIEVE_USAGE)? {
        GoalTarget::All => {
            let settlement = context.manager.achieve_all_goals();
            if settlement.is_empty() {
                io::print_info("No goals to achieve.");
                return Ok(());
            }
            for name in &settlement.achieved {
                io::print_success(format!("Goal achieved: {}", name));
            }
            if !settlement.not_achieved.is_empty() {
                io::print_warning(format!(
                    "Not enough funds for: {}",
                    settlement.not_achieved.join(", ")
                ));
            }
        }
        GoalTarget::Index(index) => match context.manager.achieve_goal(index)? {
            Some(goal) => io::print_success(format!(
                "Goal achieved: {} ({} recorded as an expense)",
                goal.name,
                context.format_amount(goal.amount)
            )),
            None => io::print_warning(format!("There is no goal number {}.", index + 1)),
        },
    }
    Ok(())
}

fn cmd_delete_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match parse_target(args, DELETE_USAGE)? {
        GoalTarget::All => {
            if !context.confirm("Delete every goal?")? {
                io::print_info("No goals deleted.");
                return Ok(());
            }
            let removed = context.manager.delete_all_goals();
            io::print_success(format!("Deleted {} goal(s).", removed));
        }
        GoalTarget::Index(index) => match context.manager.delete_goal(index) {
            Some(goal) => io::print_success(format!("Goal deleted: {}", goal.name)),
            None => io::print_warning(format!("There is no goal number {}.", index + 1)),
        },
    }
    Ok(())
}
