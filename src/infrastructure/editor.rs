//! Editor integration for writing snippet code

use crate::domain::Language;
use crate::error::{Result, SnipboxError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Session for editing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait for it to exit
    pub fn edit_file(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            SnipboxError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(SnipboxError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Edit `initial` in a scratch file under `scratch_dir` and return the
    /// saved contents. The scratch file is removed afterwards.
    pub fn edit_text(&self, scratch_dir: &Path, language: &str, initial: &str) -> Result<String> {
        let path = scratch_path(scratch_dir, language);
        fs::write(&path, initial)?;

        let result = self
            .edit_file(&path)
            .and_then(|_| fs::read_to_string(&path).map_err(SnipboxError::Io));

        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove editor scratch file");
        }

        result
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

/// Scratch file name with an extension editors can highlight
fn scratch_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("EDIT_SNIPPET.{}", file_extension(language)))
}

/// Conventional file extension for a stored language value
pub fn file_extension(language: &str) -> &'static str {
    match Language::from_value(language) {
        Some(Language::JavaScript) => "js",
        Some(Language::TypeScript) => "ts",
        Some(Language::Html) => "html",
        Some(Language::Css) => "css",
        Some(Language::Python) => "py",
        Some(Language::Java) => "java",
        Some(Language::CSharp) => "cs",
        Some(Language::Php) => "php",
        Some(Language::Go) => "go",
        Some(Language::Ruby) => "rb",
        Some(Language::Swift) => "swift",
        Some(Language::Kotlin) => "kt",
        Some(Language::Rust) => "rs",
        Some(Language::Sql) => "sql",
        Some(Language::Bash) => "sh",
        Some(Language::Json) => "json",
        Some(Language::Xml) => "xml",
        Some(Language::Markdown) => "md",
        Some(Language::Yaml) => "yaml",
        Some(Language::Other) | None => "txt",
    }
}
