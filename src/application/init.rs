//! Initialize library use case

use crate::domain::Language;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemLibrary, Library};
use std::fs;
use std::path::Path;

/// Initialize a new snippet library at the specified path.
pub fn init(path: &Path, default_language: Language) -> Result<FileSystemLibrary> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let library = FileSystemLibrary::new(path.to_path_buf());
    library.initialize()?;

    let config = Config::new(default_language);
    library.save_config(&config)?;

    library.store().try_save(&[])?;

    tracing::info!(root = %path.display(), "initialized snippet library");
    Ok(library)
}
