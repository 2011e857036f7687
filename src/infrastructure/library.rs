//! Library root discovery and layout

use crate::error::{Result, SnipboxError};
use crate::infrastructure::config::SNIPBOX_DIR;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a library root
pub const SNIPBOX_ROOT_ENV: &str = "SNIPBOX_ROOT";

/// Abstract snippet library on some medium
pub trait Library {
    /// Load configuration from .snipbox/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .snipbox/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .snipbox directory exists
    fn is_initialized(&self) -> bool;

    /// Create .snipbox directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of Library
#[derive(Debug, Clone)]
pub struct FileSystemLibrary {
    pub root: PathBuf,
}

impl FileSystemLibrary {
    /// Create a new library handle with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemLibrary { root }
    }

    /// Discover the library root.
    /// First checks SNIPBOX_ROOT environment variable, then walks up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(SNIPBOX_ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_snipbox_dir(&path) {
                return Ok(FileSystemLibrary::new(path));
            } else {
                return Err(SnipboxError::Config(format!(
                    "SNIPBOX_ROOT is set to '{}' but no .snipbox directory found. \
                    Run 'snipbox init' in that directory or unset SNIPBOX_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover library root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_snipbox_dir(&current) {
                return Ok(FileSystemLibrary::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SnipboxError::NotSnipboxDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_snipbox_dir(path: &Path) -> bool {
        path.join(SNIPBOX_DIR).is_dir()
    }

    /// The `.snipbox` directory of this library
    pub fn snipbox_dir(&self) -> PathBuf {
        self.root.join(SNIPBOX_DIR)
    }

    /// Persistence store for this library's snippet collection
    pub fn store(&self) -> FileStore {
        FileStore::new(self.snipbox_dir())
    }
}

impl Library for FileSystemLibrary {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_snipbox_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let snipbox_dir = self.snipbox_dir();

        if snipbox_dir.exists() {
            return Err(SnipboxError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&snipbox_dir)?;
        Ok(())
    }
}
