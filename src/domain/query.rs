//! Snippet search, language filtering and recency ordering
//!
//! Everything here is a pure function over a slice of snippets, so the
//! store-backed query service and the tests share the same logic.
//!
//! # Examples
//!
//! ```
//! use snipbox::domain::query::{search, sort_by_recency};
//! use snipbox::domain::Snippet;
//!
//! let snippets = vec![Snippet {
//!     id: "a".to_string(),
//!     title: "Foo Bar".to_string(),
//!     ..Default::default()
//! }];
//! assert_eq!(search(&snippets, "bar").len(), 1);
//! assert_eq!(sort_by_recency(snippets).len(), 1);
//! ```

use crate::domain::Snippet;
use std::cmp::Ordering;

/// Sentinel language value meaning "no language filter"
pub const ALL_LANGUAGES: &str = "all";

/// Number of snippets in the "recent" view
pub const RECENT_LIMIT: usize = 6;

/// Returns true when `query` is empty or only whitespace
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match against title, description, tags and
/// language. `lower_query` must already be lowercase.
fn matches_lowercase(snippet: &Snippet, lower_query: &str) -> bool {
    snippet.title.to_lowercase().contains(lower_query)
        || snippet.description.to_lowercase().contains(lower_query)
        || snippet
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lower_query))
        || snippet.language.to_lowercase().contains(lower_query)
}

/// Snippets matching `query`, in storage order.
///
/// A blank query returns every snippet. The code body is not searched.
pub fn search(snippets: &[Snippet], query: &str) -> Vec<Snippet> {
    if is_blank(query) {
        return snippets.to_vec();
    }

    let lower_query = query.to_lowercase();
    snippets
        .iter()
        .filter(|snippet| matches_lowercase(snippet, &lower_query))
        .cloned()
        .collect()
}

/// Snippets whose language equals `language` exactly.
///
/// An empty language or the `"all"` sentinel returns every snippet.
pub fn filter_by_language(snippets: &[Snippet], language: &str) -> Vec<Snippet> {
    if language.is_empty() || language == ALL_LANGUAGES {
        return snippets.to_vec();
    }

    snippets
        .iter()
        .filter(|snippet| snippet.language == language)
        .cloned()
        .collect()
}

/// Stable sort, newest `updatedAt` first.
///
/// Records with an unparseable `updatedAt` go after all dated records and
/// keep their relative order.
pub fn sort_by_recency(mut snippets: Vec<Snippet>) -> Vec<Snippet> {
    snippets.sort_by(|a, b| match (a.updated_at_time(), b.updated_at_time()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    snippets
}

/// The view a caller shows for a search box plus a language picker.
///
/// A non-empty text query wins and the language filter is ignored; the
/// language filter only applies when the query is empty. The result is
/// ordered by recency.
pub fn compose_view(snippets: &[Snippet], query: &str, language: &str) -> Vec<Snippet> {
    let selected = if !query.is_empty() {
        search(snippets, query)
    } else {
        filter_by_language(snippets, language)
    };
    sort_by_recency(selected)
}
