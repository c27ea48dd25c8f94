//! Configuration management module
//!
//! Handles loading, saving, and validation of the trainer configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{Result, TrainerError, APP_NAME, CONFIG_FILE};

/// Trainer configuration stored as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Custom slide deck and question bank; the built-in course is used when unset
    pub content_path: Option<PathBuf>,
    /// How often the TUI polls for input, as a humantime string such as "250ms"
    pub tick_rate: String,
    /// Show the running score while the quiz is in progress
    pub show_running_score: bool,
    /// Use the line-based front end instead of the full-screen TUI
    pub plain: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            tick_rate: "250ms".to_string(),
            show_running_score: true,
            plain: false,
        }
    }
}

impl TrainerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let tick_rate = self.tick_rate_duration()?;
        if tick_rate.is_zero() {
            return Err(TrainerError::ConfigError(
                "Tick rate must be greater than 0".to_string(),
            ));
        }

        const MAX_TICK_RATE: Duration = Duration::from_secs(5);
        if tick_rate > MAX_TICK_RATE {
            return Err(TrainerError::ConfigError(format!(
                "Tick rate too long: {} (max: {})",
                self.tick_rate,
                humantime::format_duration(MAX_TICK_RATE)
            )));
        }

        if let Some(path) = &self.content_path {
            if !path.is_file() {
                return Err(TrainerError::ConfigError(format!(
                    "Content file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Parsed tick rate
    pub fn tick_rate_duration(&self) -> Result<Duration> {
        humantime::parse_duration(&self.tick_rate).map_err(|e| {
            TrainerError::ConfigError(format!("Invalid tick rate '{}': {}", self.tick_rate, e))
        })
    }

    /// Set the content file
    pub fn with_content_path(mut self, path: PathBuf) -> Self {
        self.content_path = Some(path);
        self
    }

    /// Set the input poll interval
    pub fn with_tick_rate(mut self, tick_rate: impl Into<String>) -> Self {
        self.tick_rate = tick_rate.into();
        self
    }

    /// Set whether the running score is shown during the quiz
    pub fn with_show_running_score(mut self, show: bool) -> Self {
        self.show_running_score = show;
        self
    }

    /// Set whether the plain front end is used
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("{}; using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path
    ///
    /// The result is not validated here: command line overrides are applied
    /// first, then the caller validates the merged configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TrainerError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            TrainerError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Validate before saving
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TrainerError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            TrainerError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/pybrix-trainer/pybrix-trainer.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TrainerError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TrainerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate_duration().unwrap(), Duration::from_millis(250));
        assert!(config.show_running_score);
        assert!(!config.plain);
    }

    #[test]
    fn test_invalid_tick_rates() {
        assert!(TrainerConfig::new().with_tick_rate("soon").validate().is_err());
        assert!(TrainerConfig::new().with_tick_rate("0ms").validate().is_err());
        assert!(TrainerConfig::new().with_tick_rate("1min").validate().is_err());
        assert!(TrainerConfig::new().with_tick_rate("1s 500ms").validate().is_ok());
    }

    #[test]
    fn test_missing_content_path_is_rejected() {
        let config = TrainerConfig::new().with_content_path(PathBuf::from("/nonexistent/deck.toml"));
        assert!(matches!(config.validate(), Err(TrainerError::ConfigError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = TrainerConfig::new()
            .with_tick_rate("100ms")
            .with_show_running_score(false)
            .with_plain(true);

        config.save_to(&path).unwrap();
        let loaded = TrainerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "plain = true\n").unwrap();

        let loaded = TrainerConfig::load_from(&path).unwrap();
        assert!(loaded.plain);
        assert_eq!(loaded.tick_rate, "250ms");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TrainerConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, TrainerConfig::default());
    }

    #[test]
    fn test_stale_content_path_can_be_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "content_path = \"/nonexistent/old_deck.toml\"\n").unwrap();

        let loaded = TrainerConfig::load_from(&path).unwrap();
        assert!(loaded.validate().is_err());

        let deck = dir.path().join("deck.toml");
        fs::write(&deck, "").unwrap();
        let fixed = loaded.with_content_path(deck.clone());
        assert!(fixed.validate().is_ok());

        fixed.save_to(&path).unwrap();
        let reloaded = TrainerConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.content_path, Some(deck));
    }

    #[test]
    fn test_config_file_path() {
        if let Ok(path) = TrainerConfig::config_file_path() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.to_string_lossy().ends_with(CONFIG_FILE));
        }
    }
}
