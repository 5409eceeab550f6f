use serde::{Deserialize, Serialize};

use super::category::normalize_category;

/// A spending ceiling for a category, compared after normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub amount: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Returns `true` when this budget governs the already-normalized category.
    pub fn applies_to(&self, normalized_category: &str) -> bool {
        normalize_category(&self.category) == normalized_category
    }
}
