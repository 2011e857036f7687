//! Snippet repository: create, update, delete and list
//!
//! Every mutation is a full load, modify, save cycle against the store.

use crate::domain::{normalize_tags, snippet::format_timestamp, Snippet, SnippetForm};
use crate::infrastructure::SnippetStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of "now" for timestamps
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// CRUD operations over the snippet collection
pub struct SnippetRepository<S: SnippetStore> {
    store: S,
    clock: Clock,
}

impl<S: SnippetStore> SnippetRepository<S> {
    /// Create a repository using the system clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(Utc::now))
    }

    /// Create a repository with a custom clock
    pub fn with_clock(store: S, clock: Clock) -> Self {
        SnippetRepository { store, clock }
    }

    /// Create a snippet from form data, persist it and return it.
    ///
    /// Form fields are copied verbatim apart from tags, which are
    /// normalized. The title is not validated here.
    pub fn create(&self, mut form: SnippetForm) -> Snippet {
        let mut snippets = self.store.load();
        let id = fresh_id(&snippets);
        form.tags = normalize_tags(form.tags);
        let snippet = Snippet::from_form(id, form, (self.clock)());

        snippets.push(snippet.clone());
        self.store.save(&snippets);

        tracing::debug!(id = %snippet.id, "created snippet");
        snippet
    }

    /// Replace the stored snippet with the same id, refreshing `updatedAt`.
    ///
    /// The caller's record is trusted as-is, including `createdAt`, except
    /// that tags are normalized. Unknown ids leave the collection unchanged.
    pub fn update(&self, snippet: Snippet) {
        let mut snippets = self.store.load();
        let id = snippet.id.clone();

        let Some(slot) = snippets.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(id = %id, "update of unknown snippet ignored");
            return;
        };

        *slot = Snippet {
            tags: normalize_tags(snippet.tags),
            updated_at: format_timestamp((self.clock)()),
            ..snippet
        };
        self.store.save(&snippets);

        tracing::debug!(id = %id, "updated snippet");
    }

    /// Remove the snippet with this id. Absent ids are a no-op.
    pub fn delete(&self, id: &str) {
        let mut snippets = self.store.load();
        let before = snippets.len();
        snippets.retain(|s| s.id != id);

        if snippets.len() == before {
            tracing::debug!(id, "delete of unknown snippet ignored");
            return;
        }

        self.store.save(&snippets);
        tracing::debug!(id, "deleted snippet");
    }

    /// The full stored collection, unfiltered and in storage order
    pub fn list(&self) -> Vec<Snippet> {
        self.store.load()
    }

    /// Look up a single snippet by id
    pub fn get(&self, id: &str) -> Option<Snippet> {
        self.store.load().into_iter().find(|s| s.id == id)
    }
}

/// Random v4 UUID not already used in `snippets`
fn fresh_id(snippets: &[Snippet]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !snippets.iter().any(|s| s.id == id) {
            return id;
        }
    }
}
