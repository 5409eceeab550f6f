//! Persistent user preferences for the shell front end.

pub mod manager;
pub mod model;

use std::io;

use thiserror::Error;

pub use manager::ConfigManager;
pub use model::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Config manager rooted at the resolved application data directory.
pub fn default_manager() -> ConfigManager {
    ConfigManager::with_base_dir(crate::utils::paths::app_data_dir())
}
