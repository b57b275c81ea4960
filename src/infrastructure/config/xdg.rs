//! XDG preferences store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::PreferencesStore;
use crate::domain::config::PreferencesConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant preferences store
pub struct XdgPreferencesStore {
    path: PathBuf,
}

impl XdgPreferencesStore {
    /// Create a new XDG preferences store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("notifier-patterns");

        Self {
            path: config_dir.join("preferences.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into PreferencesConfig
    fn parse_toml(content: &str) -> Result<PreferencesConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize PreferencesConfig to TOML
    fn to_toml(config: &PreferencesConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgPreferencesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferencesStore for XdgPreferencesStore {
    async fn load(&self) -> Result<PreferencesConfig, ConfigError> {
        if !self.exists() {
            return Ok(PreferencesConfig::defaults());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &PreferencesConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&PreferencesConfig::defaults()).await
    }
}
