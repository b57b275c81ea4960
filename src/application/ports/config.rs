//! Preferences storage port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::PreferencesConfig;
use crate::domain::error::ConfigError;

/// Port for preferences storage
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Load preferences from storage.
    ///
    /// # Returns
    /// The built-in defaults if the file doesn't exist
    async fn load(&self) -> Result<PreferencesConfig, ConfigError>;

    /// Save preferences to storage.
    ///
    /// # Arguments
    /// * `config` - The preferences to save
    async fn save(&self, config: &PreferencesConfig) -> Result<(), ConfigError>;

    /// Get the preferences file path.
    fn path(&self) -> PathBuf;

    /// Check if the preferences file exists.
    fn exists(&self) -> bool;

    /// Initialize the preferences file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
