//! Output formatting utilities

use crate::application::DoctorReport;
use crate::domain::{language_label, Language, Snippet};

/// Date part of a stored timestamp, or the raw value if it does not parse
fn display_date(snippet: &Snippet) -> String {
    match snippet.updated_at_time() {
        Some(time) => time.format("%Y-%m-%d").to_string(),
        None => snippet.updated_at.clone(),
    }
}

/// Format a list of snippets for display, one per line
pub fn format_snippet_list(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return "No snippets found".to_string();
    }

    let mut output = String::new();
    for snippet in snippets {
        output.push_str(&format!(
            "{}  {}  {:<10}  {}",
            snippet.id,
            display_date(snippet),
            language_label(&snippet.language),
            snippet.title
        ));
        if !snippet.tags.is_empty() {
            output.push_str("  ");
            output.push_str(&format_tags(&snippet.tags));
        }
        output.push('\n');
    }
    output
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full view of one snippet: metadata header, blank line, then the code
pub fn format_snippet_detail(snippet: &Snippet) -> String {
    let mut output = format!("# {}\n", snippet.title);
    output.push_str(&format!("id:       {}\n", snippet.id));
    output.push_str(&format!(
        "language: {}\n",
        language_label(&snippet.language)
    ));
    if !snippet.tags.is_empty() {
        output.push_str(&format!("tags:     {}\n", format_tags(&snippet.tags)));
    }
    output.push_str(&format!("created:  {}\n", snippet.created_at));
    output.push_str(&format!("updated:  {}\n", snippet.updated_at));
    if !snippet.description.is_empty() {
        output.push_str(&format!("\n{}\n", snippet.description));
    }
    output.push('\n');
    output.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Recognized languages as `value  Label` lines
pub fn format_language_list() -> String {
    let mut output = String::new();
    for language in Language::ALL {
        output.push_str(&format!("{:<12}{}\n", language.value(), language.label()));
    }
    output
}

/// Human-readable doctor findings
pub fn format_doctor_report(report: &DoctorReport) -> String {
    let mut output = format!("{} snippets\n", report.snippet_count);

    if !report.duplicate_ids.is_empty() {
        output.push_str(&format!(
            "duplicate ids: {}\n",
            report.duplicate_ids.join(", ")
        ));
    }
    if !report.untitled.is_empty() {
        output.push_str(&format!("untitled: {}\n", report.untitled.join(", ")));
    }
    if !report.bad_timestamps.is_empty() {
        output.push_str(&format!(
            "unparseable updatedAt: {}\n",
            report.bad_timestamps.join(", ")
        ));
    }
    if !report.unknown_languages.is_empty() {
        output.push_str(&format!(
            "unlabelled languages: {}\n",
            report.unknown_languages.join(", ")
        ));
    }
    if report.is_healthy() {
        output.push_str("OK\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snippet {
        Snippet {
            id: "abc".to_string(),
            title: "Hello".to_string(),
            code: "print('hi')".to_string(),
            language: "python".to_string(),
            description: String::new(),
            tags: vec!["greeting".to_string(), "demo".to_string()],
            created_at: "2025-01-17T09:30:00.000Z".to_string(),
            updated_at: "2025-01-18T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_snippet_list(&[]), "No snippets found");
    }

    #[test]
    fn test_format_snippet_list() {
        let output = format_snippet_list(&[sample()]);
        assert_eq!(
            output,
            "abc  2025-01-18  Python      Hello  #greeting #demo\n"
        );
    }

    #[test]
    fn test_format_list_unknown_language_and_bad_date() {
        let mut snippet = sample();
        snippet.language = "cobol".to_string();
        snippet.updated_at = "someday".to_string();
        snippet.tags.clear();

        let output = format_snippet_list(&[snippet]);
        assert_eq!(output, "abc  someday  cobol       Hello\n");
    }

    #[test]
    fn test_format_detail() {
        let output = format_snippet_detail(&sample());
        assert!(output.starts_with("# Hello\n"));
        assert!(output.contains("language: Python\n"));
        assert!(output.contains("tags:     #greeting #demo\n"));
        assert!(output.ends_with("\nprint('hi')\n"));
    }

    #[test]
    fn test_format_language_list() {
        let output = format_language_list();
        assert_eq!(output.lines().count(), 20);
        assert!(output.contains("csharp      C#\n"));
    }

    #[test]
    fn test_format_doctor_report() {
        let healthy = DoctorReport {
            snippet_count: 3,
            ..Default::default()
        };
        assert_eq!(format_doctor_report(&healthy), "3 snippets\nOK\n");

        let sick = DoctorReport {
            snippet_count: 2,
            duplicate_ids: vec!["a".to_string()],
            ..Default::default()
        };
        let output = format_doctor_report(&sick);
        assert!(output.contains("duplicate ids: a"));
        assert!(!output.contains("OK"));
    }
}
