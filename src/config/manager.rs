use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::utils::paths;

use super::{Config, ConfigError};

const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`] inside the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Self {
        let config_path = paths::config_file_in(&base);
        Self {
            base_dir: base,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored config, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }

    /// Path of the ledger document selected by `config`.
    pub fn data_file(&self, config: &Config) -> PathBuf {
        config.resolve_data_file(&self.base_dir)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let config = manager.load().expect("load config");
        assert_eq!(config, Config::default());
        assert_eq!(
            manager.data_file(&config),
            dir.path().join("finance_data.json")
        );
    }

    #[test]
    fn config_manager_persists_and_loads_config() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().join("home"));

        let config = Config {
            data_file: Some(PathBuf::from("books/ledger.json")),
            currency_label: "EUR".into(),
            precision: 1,
            ui_color_enabled: false,
        };
        manager.save(&config).expect("save config");
        let loaded = manager.load().expect("load config");

        assert_eq!(loaded, config);
        assert_eq!(
            manager.data_file(&loaded),
            dir.path().join("home").join("books/ledger.json")
        );
        assert_eq!(loaded.format_amount(3.27), "EUR 3.3");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::write(manager.config_path(), r#"{"currency_label": "USD"}"#).unwrap();
        let loaded = manager.load().expect("load config");
        assert_eq!(loaded.currency_label, "USD");
        assert_eq!(loaded.precision, 2);
        assert!(loaded.ui_color_enabled);
    }
}
