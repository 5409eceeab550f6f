use serde::{Deserialize, Serialize};

use super::category::goal_settlement_label;

/// An open savings target. Goals leave the ledger once achieved or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    pub amount: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Category of the expense emitted when this goal is achieved.
    pub fn settlement_category(&self) -> String {
        goal_settlement_label(&self.name)
    }
}

/// Outcome of settling every open goal against the available balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalSettlement {
    pub achieved: Vec<String>,
    pub not_achieved: Vec<String>,
}

impl GoalSettlement {
    pub fn is_empty(&self) -> bool {
        self.achieved.is_empty() && self.not_achieved.is_empty()
    }
}
