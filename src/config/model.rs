use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::paths;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional ledger document location. Defaults to `<app dir>/finance_data.json`.
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_currency_label")]
    pub currency_label: String,
    #[serde(default = "Config::default_precision")]
    pub precision: u8,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency_label: Self::default_currency_label(),
            precision: Self::default_precision(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_label() -> String {
        "RM".into()
    }

    pub fn default_precision() -> u8 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_file(&self, base: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => paths::ledger_file_in(base),
        }
    }

    /// Formats an amount with the configured label and precision, e.g. `RM 12.50`.
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{label} {amount:.prec$}",
            label = self.currency_label,
            amount = amount,
            prec = self.precision as usize
        )
    }
}
