//! Configuration management

use crate::domain::Language;
use crate::error::{Result, SnipboxError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the directory marking a library root
pub const SNIPBOX_DIR: &str = ".snipbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Language used by `add` when none is given
    #[serde(default = "default_language")]
    pub default_language: String,
    pub editor: String,
    pub created: DateTime<Utc>,
}

fn default_language() -> String {
    Language::Other.value().to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new(default_language: Language) -> Self {
        Config {
            default_language: default_language.value().to_string(),
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .snipbox/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SNIPBOX_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnipboxError::NotSnipboxDirectory(path.to_path_buf())
            } else {
                SnipboxError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SnipboxError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .snipbox/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let snipbox_dir = path.join(SNIPBOX_DIR);
        let config_path = snipbox_dir.join("config.toml");

        if !snipbox_dir.exists() {
            fs::create_dir(&snipbox_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
