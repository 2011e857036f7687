//! Domain layer - Snippet records, languages and query logic

pub mod language;
pub mod query;
pub mod snippet;

pub use language::{language_label, Language};
pub use snippet::{normalize_tags, Snippet, SnippetDocument, SnippetForm};
