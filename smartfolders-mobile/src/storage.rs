//! UI preferences kept in the browser's local storage

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use smartfolders_common::config::UiConfig;

const CONFIG_KEY: &str = "smartfolders_config";

pub struct ConfigStorage;

impl ConfigStorage {
    /// Stored preferences, or defaults when absent or unusable
    pub fn load() -> UiConfig {
        match LocalStorage::get::<UiConfig>(CONFIG_KEY) {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "stored preferences rejected, using defaults");
                    UiConfig::default()
                }
            },
            Err(StorageError::KeyNotFound(_)) => UiConfig::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored preferences, using defaults");
                UiConfig::default()
            }
        }
    }

    pub fn save(config: &UiConfig) -> Result<(), String> {
        config.validate().map_err(|e| e.to_string())?;
        LocalStorage::set(CONFIG_KEY, config)
            .map_err(|e| format!("Could not save preferences: {}", e))?;
        tracing::info!("preferences saved");
        Ok(())
    }

    pub fn clear() {
        LocalStorage::delete(CONFIG_KEY);
    }
}
