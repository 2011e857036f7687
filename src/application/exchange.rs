//! Import and export of the snippet collection as a portable JSON document

use crate::domain::{normalize_tags, Snippet, SnippetDocument};
use crate::error::{Result, SnipboxError};
use crate::infrastructure::SnippetStore;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name used when exporting into a directory
pub const EXPORT_FILENAME: &str = "code-snippets.json";

/// Outcome of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Records now in the collection
    pub imported: usize,
    /// Records dropped because they were not snippet-shaped or repeated an id
    pub skipped: usize,
}

/// Converts between the stored collection and an export document
pub struct ExchangeService<S: SnippetStore> {
    store: S,
}

impl<S: SnippetStore> ExchangeService<S> {
    pub fn new(store: S) -> Self {
        ExchangeService { store }
    }

    /// Pretty-printed `{ "snippets": [...] }` of the full collection
    pub fn export(&self) -> Result<String> {
        let document = SnippetDocument::new(self.store.load());
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Write the export document to `path`. A directory gets
    /// `code-snippets.json` inside it. Returns the file written.
    pub fn export_to(&self, path: &Path) -> Result<PathBuf> {
        let target = if path.is_dir() {
            path.join(EXPORT_FILENAME)
        } else {
            path.to_path_buf()
        };

        let contents = self.export()?;
        fs::write(&target, contents)?;
        Ok(target)
    }

    /// Replace the collection with the records in `text`.
    ///
    /// Returns false, leaving the collection untouched, if the document
    /// cannot be used.
    pub fn import(&self, text: &str) -> bool {
        match self.import_with_report(text) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to import snippets");
                false
            }
        }
    }

    /// Like [`import`](Self::import) but reports how many records were kept.
    pub fn import_with_report(&self, text: &str) -> Result<ImportReport> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| SnipboxError::ImportFailed(format!("invalid JSON: {}", e)))?;

        let records = resolve_records(&document).ok_or_else(|| {
            SnipboxError::ImportFailed("no array of snippets found in document".to_string())
        })?;

        let (snippets, skipped) = coerce_records(records);
        if snippets.is_empty() && !records.is_empty() {
            return Err(SnipboxError::ImportFailed(format!(
                "none of the {} records is a valid snippet",
                records.len()
            )));
        }

        self.store.save(&snippets);

        let report = ImportReport {
            imported: snippets.len(),
            skipped,
        };
        tracing::info!(imported = report.imported, skipped = report.skipped, "imported snippets");
        Ok(report)
    }
}

/// The `snippets` array if present, else the first array-valued top-level
/// field in document order.
fn resolve_records(document: &Value) -> Option<&Vec<Value>> {
    let fields = document.as_object()?;

    if let Some(Value::Array(records)) = fields.get("snippets") {
        return Some(records);
    }

    fields.values().find_map(|value| value.as_array())
}

/// Coerce raw records into snippets, dropping ones that do not fit.
///
/// Missing fields default to empty and tags are normalized. A record without
/// an `id` field gets a fresh one; an explicit id, even an empty one, is kept.
/// A repeated id keeps only the first record.
fn coerce_records(records: &[Value]) -> (Vec<Snippet>, usize) {
    let mut snippets = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        let mut snippet: Snippet = match serde_json::from_value(record.clone()) {
            Ok(snippet) => snippet,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping record that is not a snippet");
                skipped += 1;
                continue;
            }
        };

        if record.get("id").is_none() {
            snippet.id = Uuid::new_v4().to_string();
        }
        if !seen.insert(snippet.id.clone()) {
            tracing::warn!(index, id = %snippet.id, "skipping record with duplicate id");
            skipped += 1;
            continue;
        }

        snippet.tags = normalize_tags(std::mem::take(&mut snippet.tags));
        snippets.push(snippet);
    }

    (snippets, skipped)
}
