//! Category label helpers shared by budgets, summaries and goal settlements.

/// Canonical form used when comparing categories against budgets.
///
/// Surrounding whitespace is trimmed, the first character upper-cased and the
/// remainder lower-cased, so `" fOOD "` becomes `"Food"`.
pub fn normalize_category(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Expense category recorded when a savings goal is achieved.
pub fn goal_settlement_label(goal_name: &str) -> String {
    format!("Goal (\"{}\")", goal_name)
}
