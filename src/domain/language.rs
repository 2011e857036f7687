//! Recognized snippet languages and their display labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of languages the library knows how to label.
///
/// A snippet's `language` field is stored as a plain string, so values outside
/// this set are still accepted; they just have no label of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Python,
    Java,
    CSharp,
    Php,
    Go,
    Ruby,
    Swift,
    Kotlin,
    Rust,
    Sql,
    Bash,
    Json,
    Xml,
    Markdown,
    Yaml,
    #[default]
    Other,
}

impl Language {
    /// All recognized languages, in display order
    pub const ALL: [Language; 20] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Html,
        Language::Css,
        Language::Python,
        Language::Java,
        Language::CSharp,
        Language::Php,
        Language::Go,
        Language::Ruby,
        Language::Swift,
        Language::Kotlin,
        Language::Rust,
        Language::Sql,
        Language::Bash,
        Language::Json,
        Language::Xml,
        Language::Markdown,
        Language::Yaml,
        Language::Other,
    ];

    /// Stored value (e.g. "csharp")
    pub fn value(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
            Language::Sql => "sql",
            Language::Bash => "bash",
            Language::Json => "json",
            Language::Xml => "xml",
            Language::Markdown => "markdown",
            Language::Yaml => "yaml",
            Language::Other => "other",
        }
    }

    /// Human-readable label (e.g. "C#")
    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Rust => "Rust",
            Language::Sql => "SQL",
            Language::Bash => "Bash",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Markdown => "Markdown",
            Language::Yaml => "YAML",
            Language::Other => "Other",
        }
    }

    /// Look up a stored value exactly. Language values are case-sensitive.
    pub fn from_value(value: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.value() == value)
    }
}

/// Display label for a stored language value, falling back to the raw value
/// for free-text languages.
pub fn language_label(value: &str) -> &str {
    match Language::from_value(value) {
        Some(lang) => lang.label(),
        None => value,
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Lenient parse for user input: accepts values and labels in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.value() == wanted || lang.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown language: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_values_are_unique() {
        let mut values: Vec<&str> = Language::ALL.iter().map(|l| l.value()).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 20);
    }

    #[test]
    fn test_from_value_is_exact() {
        assert_eq!(Language::from_value("python"), Some(Language::Python));
        assert_eq!(Language::from_value("Python"), None);
        assert_eq!(Language::from_value("cobol"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::CSharp.label(), "C#");
        assert_eq!(Language::Yaml.label(), "YAML");
        assert_eq!(Language::Other.label(), "Other");
    }

    #[test]
    fn test_language_label_falls_back_to_raw_value() {
        assert_eq!(language_label("typescript"), "TypeScript");
        assert_eq!(language_label("cobol"), "cobol");
    }

    #[test]
    fn test_from_str_accepts_labels_and_case() {
        assert_eq!(Language::from_str("C#").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("RUST").unwrap(), Language::Rust);
        assert_eq!(Language::from_str(" go ").unwrap(), Language::Go);
        assert!(Language::from_str("cobol").is_err());
    }

    #[test]
    fn test_serde_uses_stored_value() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let parsed: Language = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(parsed, Language::JavaScript);
    }
}
