//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod library;
pub mod store;

pub use config::Config;
pub use editor::EditorSession;
pub use library::{FileSystemLibrary, Library};
pub use store::{FileStore, MemoryStore, SnippetStore};
