//! Library health check use case

use crate::domain::{Language, Snippet};
use crate::error::Result;
use crate::infrastructure::{FileSystemLibrary, Library};
use std::collections::HashSet;

/// Findings from inspecting a library
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DoctorReport {
    pub snippet_count: usize,
    /// Ids that appear on more than one record
    pub duplicate_ids: Vec<String>,
    /// Ids of records with an empty title
    pub untitled: Vec<String>,
    /// Ids of records whose `updatedAt` is not a timestamp
    pub bad_timestamps: Vec<String>,
    /// Language values outside the recognized set, sorted
    pub unknown_languages: Vec<String>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.duplicate_ids.is_empty() && self.untitled.is_empty() && self.bad_timestamps.is_empty()
    }
}

/// Inspect the stored collection.
///
/// Unlike normal loads this fails on a corrupt document instead of treating
/// it as empty.
pub fn check(library: &FileSystemLibrary) -> Result<DoctorReport> {
    library.load_config()?;
    let snippets = library.store().try_load()?;
    Ok(inspect(&snippets))
}

fn inspect(snippets: &[Snippet]) -> DoctorReport {
    let mut report = DoctorReport {
        snippet_count: snippets.len(),
        ..Default::default()
    };

    let mut seen = HashSet::new();
    let mut languages = HashSet::new();
    for snippet in snippets {
        if !seen.insert(snippet.id.as_str()) && !report.duplicate_ids.contains(&snippet.id) {
            report.duplicate_ids.push(snippet.id.clone());
        }
        if snippet.title.trim().is_empty() {
            report.untitled.push(snippet.id.clone());
        }
        if snippet.updated_at_time().is_none() {
            report.bad_timestamps.push(snippet.id.clone());
        }
        if Language::from_value(&snippet.language).is_none() {
            languages.insert(snippet.language.clone());
        }
    }

    report.unknown_languages = languages.into_iter().collect();
    report.unknown_languages.sort();
    report
}
