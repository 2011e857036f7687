//! Query use cases: search, language filter and the composed list view

use crate::domain::query::{self, RECENT_LIMIT};
use crate::domain::Snippet;
use crate::infrastructure::SnippetStore;

/// Read-only views over the stored collection.
///
/// Every call re-reads the store; results are never cached.
pub struct QueryService<S: SnippetStore> {
    store: S,
}

impl<S: SnippetStore> QueryService<S> {
    pub fn new(store: S) -> Self {
        QueryService { store }
    }

    /// Snippets matching a free-text query, in storage order
    pub fn search(&self, text: &str) -> Vec<Snippet> {
        query::search(&self.store.load(), text)
    }

    /// Snippets with exactly this language; `""` or `"all"` means everything
    pub fn filter_by_language(&self, language: &str) -> Vec<Snippet> {
        query::filter_by_language(&self.store.load(), language)
    }

    /// Search or language view, newest first.
    /// A non-empty query takes priority over the language filter.
    pub fn view(&self, text: &str, language: &str) -> Vec<Snippet> {
        query::compose_view(&self.store.load(), text, language)
    }

    /// The most recently updated snippets of `view`
    pub fn recent(&self, text: &str, language: &str) -> Vec<Snippet> {
        let mut snippets = self.view(text, language);
        snippets.truncate(RECENT_LIMIT);
        snippets
    }
}
