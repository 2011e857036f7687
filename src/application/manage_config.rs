//! Config management use case

use crate::domain::Language;
use crate::error::{Result, SnipboxError};
use crate::infrastructure::{Config, FileSystemLibrary, Library};
use std::str::FromStr;

/// Service for managing library configuration
pub struct ConfigService {
    library: FileSystemLibrary,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(library: FileSystemLibrary) -> Self {
        ConfigService { library }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.library.load_config()?;

        match key {
            "default_language" => Ok(config.default_language),
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SnipboxError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_language, editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.library.load_config()?;

        match key {
            "default_language" => {
                let language = Language::from_str(value).map_err(SnipboxError::Config)?;
                config.default_language = language.value().to_string();
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(SnipboxError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SnipboxError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_language, editor",
                    key
                )));
            }
        }

        self.library.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.library.load_config()
    }
}
