//! Facade that owns ledger state, enforces the money-safety rules and persists every change.

use tracing::{debug, info, warn};

use crate::core::services::{
    BudgetService, CategorySummary, ExpenseShare, GoalService, LedgerOverview, SummaryService,
    TransactionService,
};
use crate::core::time::{Clock, SystemClock};
use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{Budget, Expense, Goal, GoalSettlement, Income, Ledger};
use crate::storage::{LedgerStorage, RepairAction};

/// How the ledger document was obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document parsed as-is.
    Loaded,
    /// Document parsed after list-shape repairs; the repaired form was re-saved.
    Repaired(Vec<RepairAction>),
    /// No document existed; an empty one was written.
    Created,
    /// Document was unreadable or corrupt and has been replaced by an empty one.
    Recovered(String),
}

pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
    clock: Box<dyn Clock>,
    load_outcome: LoadOutcome,
    save_warning: Option<LedgerError>,
}

impl LedgerManager {
    /// Opens the ledger held by `storage`, using the system clock for entry dates.
    pub fn open(storage: Box<dyn LedgerStorage>) -> Self {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    /// Opens the ledger held by `storage`. Never fails: missing or corrupt
    /// documents are replaced by an empty ledger which is persisted immediately.
    pub fn open_with_clock(storage: Box<dyn LedgerStorage>, clock: Box<dyn Clock>) -> Self {
        let location = storage.describe();
        let (ledger, load_outcome) = match storage.read() {
            Ok(Some(report)) if report.was_repaired() => {
                for repair in &report.repairs {
                    warn!(document = %location, "{}", repair);
                }
                (report.ledger, LoadOutcome::Repaired(report.repairs))
            }
            Ok(Some(report)) => (report.ledger, LoadOutcome::Loaded),
            Ok(None) => {
                info!(document = %location, "no ledger document found; creating an empty one");
                (Ledger::new(), LoadOutcome::Created)
            }
            Err(err) => {
                warn!(document = %location, error = %err, "ledger document unusable; resetting to empty");
                (Ledger::new(), LoadOutcome::Recovered(err.to_string()))
            }
        };

        let mut manager = Self {
            ledger,
            storage,
            clock,
            load_outcome,
            save_warning: None,
        };
        if manager.load_outcome != LoadOutcome::Loaded {
            manager.persist();
        }
        info!(
            document = %location,
            incomes = manager.ledger.incomes.len(),
            expenses = manager.ledger.expenses.len(),
            budgets = manager.ledger.budgets.len(),
            goals = manager.ledger.goals.len(),
            "ledger ready"
        );
        manager
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn location(&self) -> String {
        self.storage.describe()
    }

    /// Writes the full ledger now. Clears any pending save warning on success.
    pub fn save(&mut self) -> LedgerResult<()> {
        self.storage.write(&self.ledger)?;
        self.save_warning = None;
        Ok(())
    }

    /// Returns the most recent failed save, if it has not been superseded by a successful one.
    pub fn save_warning(&self) -> Option<&LedgerError> {
        self.save_warning.as_ref()
    }

    pub fn take_save_warning(&mut self) -> Option<LedgerError> {
        self.save_warning.take()
    }

    fn persist(&mut self) {
        if let Err(err) = self.save() {
            warn!(document = %self.storage.describe(), error = %err, "could not save ledger");
            self.save_warning = Some(err);
        }
    }

    pub fn add_income(&mut self, category: &str, amount: f64) -> LedgerResult<Income> {
        let category = TransactionService::validate_label("category", category)?;
        let amount = TransactionService::validate_amount(amount)?;
        TransactionService::ensure_finite_total("income", self.ledger.total_income(), amount)?;
        let income = Income::new(category, amount, self.clock.today());
        self.ledger.incomes.push(income.clone());
        debug!(category = %income.category, amount, "income added");
        self.persist();
        Ok(income)
    }

    /// Records an expense after checking available funds, then the category budget.
    pub fn add_expense(&mut self, category: &str, amount: f64) -> LedgerResult<Expense> {
        let category = TransactionService::validate_label("category", category)?;
        let amount = TransactionService::validate_amount(amount)?;
        TransactionService::ensure_finite_total("expense", self.ledger.total_expense(), amount)?;
        BudgetService::ensure_funds(&self.ledger, amount)?;
        BudgetService::ensure_within_budget(&self.ledger, &category, amount)?;
        let expense = Expense::new(category, amount, self.clock.today());
        self.ledger.expenses.push(expense.clone());
        debug!(category = %expense.category, amount, "expense added");
        self.persist();
        Ok(expense)
    }

    pub fn add_budget(&mut self, category: &str, amount: f64) -> LedgerResult<Budget> {
        let category = TransactionService::validate_label("category", category)?;
        let amount = TransactionService::validate_amount(amount)?;
        let budget = Budget::new(category, amount);
        self.ledger.budgets.push(budget.clone());
        debug!(category = %budget.category, amount, "budget added");
        self.persist();
        Ok(budget)
    }

    /// Adds an open goal. Funds are only checked when the goal is achieved.
    pub fn add_goal(&mut self, name: &str, amount: f64) -> LedgerResult<Goal> {
        let name = TransactionService::validate_label("goal name", name)?;
        let amount = TransactionService::validate_amount(amount)?;
        let goal = Goal::new(name, amount);
        self.ledger.goals.push(goal.clone());
        debug!(goal = %goal.name, amount, "goal added");
        self.persist();
        Ok(goal)
    }

    /// Removes the goal at `index`. Out-of-range indices are a no-op returning `None`.
    pub fn delete_goal(&mut self, index: usize) -> Option<Goal> {
        if index >= self.ledger.goals.len() {
            return None;
        }
        let goal = self.ledger.goals.remove(index);
        debug!(goal = %goal.name, "goal deleted");
        self.persist();
        Some(goal)
    }

    /// Achieves the goal at `index`, recording its amount as a settlement expense.
    ///
    /// Returns `Ok(None)` for an out-of-range index and
    /// [`LedgerError::InsufficientFunds`] (leaving the goal open) when the
    /// balance cannot cover it.
    pub fn achieve_goal(&mut self, index: usize) -> LedgerResult<Option<Goal>> {
        let Some(goal) = self.ledger.goals.get(index) else {
            return Ok(None);
        };
        GoalService::ensure_achievable(goal, self.ledger.available_funds())?;
        let goal = self.settle_goal(index);
        self.persist();
        Ok(Some(goal))
    }

    /// Achieves every goal the balance can cover, earliest-declared first.
    ///
    /// Each goal is checked against the balance left by the goals settled
    /// before it, and each achievement is persisted before the next attempt.
    pub fn achieve_all_goals(&mut self) -> GoalSettlement {
        let mut settlement = GoalSettlement::default();
        let mut index = 0;
        while index < self.ledger.goals.len() {
            let goal = &self.ledger.goals[index];
            if GoalService::ensure_achievable(goal, self.ledger.available_funds()).is_err() {
                settlement.not_achieved.push(goal.name.clone());
                index += 1;
                continue;
            }
            let goal = self.settle_goal(index);
            self.persist();
            settlement.achieved.push(goal.name);
        }
        info!(
            achieved = settlement.achieved.len(),
            not_achieved = settlement.not_achieved.len(),
            "goal settlement finished"
        );
        settlement
    }

    fn settle_goal(&mut self, index: usize) -> Goal {
        let goal = self.ledger.goals.remove(index);
        let expense = GoalService::settlement_expense(&goal, self.clock.today());
        self.ledger.expenses.push(expense);
        debug!(goal = %goal.name, amount = goal.amount, "goal achieved");
        goal
    }

    /// Removes every open goal and returns how many were dropped.
    pub fn delete_all_goals(&mut self) -> usize {
        let removed = self.ledger.goals.len();
        self.ledger.goals.clear();
        debug!(removed, "all goals deleted");
        self.persist();
        removed
    }

    /// Removes every income and expense and returns how many entries were dropped.
    pub fn clear_incomes_and_expenses(&mut self) -> usize {
        let removed = self.ledger.incomes.len() + self.ledger.expenses.len();
        self.ledger.incomes.clear();
        self.ledger.expenses.clear();
        debug!(removed, "incomes and expenses cleared");
        self.persist();
        removed
    }

    pub fn clear_budgets(&mut self) -> usize {
        let removed = self.ledger.budgets.len();
        self.ledger.budgets.clear();
        debug!(removed, "budgets cleared");
        self.persist();
        removed
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn incomes(&self) -> &[Income] {
        &self.ledger.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.ledger.budgets
    }

    pub fn goals(&self) -> &[Goal] {
        &self.ledger.goals
    }

    pub fn total_income(&self) -> f64 {
        self.ledger.total_income()
    }

    pub fn total_expense(&self) -> f64 {
        self.ledger.total_expense()
    }

    pub fn available_funds(&self) -> f64 {
        self.ledger.available_funds()
    }

    pub fn can_add_expense(&self, amount: f64) -> bool {
        BudgetService::can_spend(&self.ledger, amount)
    }

    /// Sums expenses stored under exactly `category`; callers normalize first if needed.
    pub fn category_expense(&self, category: &str) -> f64 {
        self.ledger.category_expense(category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.ledger.categories()
    }

    pub fn remaining_budget(&self, category: &str) -> Option<f64> {
        BudgetService::remaining_budget(&self.ledger, category)
    }

    pub fn overview(&self) -> LedgerOverview {
        SummaryService::overview(&self.ledger)
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        SummaryService::category_summaries(&self.ledger)
    }

    pub fn expense_breakdown(&self) -> Vec<ExpenseShare> {
        SummaryService::expense_breakdown(&self.ledger)
    }
}
