//! Persistence store for the snippet collection
//!
//! The whole collection lives in one JSON document and is always loaded and
//! saved as a unit. Read paths never fail: a missing medium or a corrupt
//! document both load as an empty collection.

use crate::domain::{Snippet, SnippetDocument};
use crate::error::{Result, SnipboxError};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key: file name of the collection document inside `.snipbox/`
pub const STORE_FILENAME: &str = "snippets.json";

/// Durable storage of the full snippet collection.
///
/// There is no locking: two writers doing load-modify-save at the same time
/// will lose one of the updates. Last save wins.
pub trait SnippetStore {
    /// Load the stored collection, or an empty one if nothing usable is stored
    fn load(&self) -> Vec<Snippet>;

    /// Replace the stored collection. Failures are logged, not returned.
    fn save(&self, snippets: &[Snippet]);
}

/// JSON file store at `<dir>/snippets.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given directory (normally `.snipbox/`)
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    /// Path of the collection document
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILENAME)
    }

    /// A store without its directory has no durable medium
    pub fn is_available(&self) -> bool {
        self.dir.is_dir()
    }

    /// Strict load that tells "empty" apart from "corrupt".
    ///
    /// Returns `Ok(vec![])` when the medium or the document does not exist.
    pub fn try_load(&self) -> Result<Vec<Snippet>> {
        if !self.is_available() {
            return Ok(Vec::new());
        }

        let path = self.path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SnipboxError::Io(e)),
        };

        let document: SnippetDocument = serde_json::from_str(&contents)?;
        Ok(document.snippets)
    }

    /// Serialize and write the document: temp file in the same directory,
    /// then rename into place so readers never see a partial write.
    pub fn try_save(&self, snippets: &[Snippet]) -> Result<()> {
        let document = SnippetDocument::new(snippets.to_vec());
        let contents = serde_json::to_string(&document)?;
        write_atomic(&self.path(), &contents)
    }
}

impl SnippetStore for FileStore {
    fn load(&self) -> Vec<Snippet> {
        if !self.is_available() {
            tracing::debug!(dir = %self.dir.display(), "store directory missing, loading empty collection");
            return Vec::new();
        }

        match self.try_load() {
            Ok(snippets) => snippets,
            Err(e) => {
                tracing::error!(path = %self.path().display(), error = %e, "failed to load snippets from storage");
                Vec::new()
            }
        }
    }

    fn save(&self, snippets: &[Snippet]) {
        if !self.is_available() {
            tracing::debug!(dir = %self.dir.display(), "store directory missing, skipping save");
            return;
        }

        if let Err(e) = self.try_save(snippets) {
            tracing::error!(path = %self.path().display(), error = %e, "failed to save snippets to storage");
        }
    }
}

/// Write `content` to `path` using a best-effort atomic replace.
///
/// On Windows, `rename` does not overwrite existing files, so the destination
/// is removed first.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_name = format!(
        "{}.snipbox-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(STORE_FILENAME),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SnipboxError::Io(e));
    }
    Ok(())
}

/// In-process store, used by tests and by callers embedding the library
/// without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snippets: RefCell<Vec<Snippet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store seeded with an existing collection
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        MemoryStore {
            snippets: RefCell::new(snippets),
        }
    }
}

impl SnippetStore for MemoryStore {
    fn load(&self) -> Vec<Snippet> {
        self.snippets.borrow().clone()
    }

    fn save(&self, snippets: &[Snippet]) {
        *self.snippets.borrow_mut() = snippets.to_vec();
    }
}

impl<S: SnippetStore + ?Sized> SnippetStore for &S {
    fn load(&self) -> Vec<Snippet> {
        (**self).load()
    }

    fn save(&self, snippets: &[Snippet]) {
        (**self).save(snippets)
    }
}
