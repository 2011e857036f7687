//! Snippet record, form data and the persisted document shape

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single stored code sample with its metadata.
///
/// Field names are serialized in camelCase so stored and exported documents
/// keep the `createdAt`/`updatedAt` keys. Timestamps stay as the ISO-8601
/// strings they were written with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Snippet {
    /// Build a new record from form data. Identity and timestamps are
    /// supplied by the repository.
    pub fn from_form(id: String, form: SnippetForm, now: DateTime<Utc>) -> Self {
        let stamp = format_timestamp(now);
        Snippet {
            id,
            title: form.title,
            code: form.code,
            language: form.language,
            description: form.description,
            tags: form.tags,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// `updatedAt` parsed as a point in time, if it is a valid timestamp
    pub fn updated_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    /// Form data for this record, used to prefill edits
    pub fn to_form(&self) -> SnippetForm {
        SnippetForm {
            title: self.title.clone(),
            code: self.code.clone(),
            language: self.language.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Copy of this record with the editable fields replaced by `form`.
    /// `id`, `createdAt` and `updatedAt` are carried over unchanged.
    pub fn with_form(&self, form: SnippetForm) -> Self {
        Snippet {
            id: self.id.clone(),
            title: form.title,
            code: form.code,
            language: form.language,
            description: form.description,
            tags: form.tags,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// Caller-supplied fields of a snippet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnippetForm {
    pub title: String,
    pub code: String,
    pub language: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl SnippetForm {
    pub fn new(title: impl Into<String>, code: impl Into<String>, language: impl Into<String>) -> Self {
        SnippetForm {
            title: title.into(),
            code: code.into(),
            language: language.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the tag list, normalizing it on the way in
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = normalize_tags(tags);
        self
    }
}

/// Trim tags, drop empty ones and keep only the first occurrence of each.
pub fn normalize_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag: String = tag.into();
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// The single persisted document: `{ "snippets": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnippetDocument {
    pub snippets: Vec<Snippet>,
}

impl SnippetDocument {
    pub fn new(snippets: Vec<Snippet>) -> Self {
        SnippetDocument { snippets }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-17T09:30:00.000Z`
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 timestamp. Bare dates are read as UTC midnight.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
