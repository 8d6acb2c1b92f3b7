use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::composer::ComposerTuning;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Tunables for the conversation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rolling window for emotional pattern analysis, in days
    pub history_window_days: i64,
    /// Calendar look-ahead for upcoming significant dates, in days
    pub upcoming_window_days: i64,
    /// Maximum person-scoped memories surfaced per reply
    pub retrieval_limit: usize,
    /// Average intensity above which persistent feelings are acknowledged
    pub intense_threshold: f64,
    /// Reading intensity at which the reply offers support
    pub support_intensity: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window_days: 30,
            upcoming_window_days: 14,
            retrieval_limit: 3,
            intense_threshold: 7.0,
            support_intensity: 8,
        }
    }
}

impl EngineConfig {
    pub fn tuning(&self) -> ComposerTuning {
        ComposerTuning {
            intense_threshold: self.intense_threshold,
            support_intensity: self.support_intensity,
            retrieval_limit: self.retrieval_limit,
            upcoming_window_days: self.upcoming_window_days,
            ..ComposerTuning::default()
        }
    }
}

/// Default names for the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub user_name: String,
    pub companion_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_name: "friend".to_string(),
            companion_name: "Ever".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, creating a default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".solace").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.history_window_days, 30);
        assert_eq!(config.engine.upcoming_window_days, 14);
        assert_eq!(config.profile.companion_name, "Ever");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.engine.retrieval_limit, 3);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.engine.upcoming_window_days = 30;
        config.profile.user_name = "sam".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.engine.upcoming_window_days, 30);
        assert_eq!(loaded.profile.user_name, "sam");
    }

    #[test]
    fn test_tuning_carries_thresholds() {
        let mut engine = EngineConfig::default();
        engine.intense_threshold = 6.5;
        let tuning = engine.tuning();
        assert_eq!(tuning.intense_threshold, 6.5);
    }
}
