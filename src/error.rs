//! Error types for snipbox

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the snipbox application
#[derive(Debug, Error)]
pub enum SnipboxError {
    #[error("Not a snipbox directory: {0}")]
    NotSnipboxDirectory(PathBuf),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Import failed: {0}")]
    ImportFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SnipboxError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SnipboxError::NotSnipboxDirectory(_) => 2,
            SnipboxError::SnippetNotFound(_) => 3,
            SnipboxError::ImportFailed(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SnipboxError::NotSnipboxDirectory(path) => {
                format!(
                    "Not a snipbox directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'snipbox init' in this directory to create a new library\n\
                    • Navigate to an existing snipbox directory\n\
                    • Set SNIPBOX_ROOT environment variable to your library path",
                    path.display()
                )
            }
            SnipboxError::SnippetNotFound(id) => {
                format!(
                    "No snippet with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'snipbox list' to see snippet ids\n\
                    • Ids are matched exactly, copy the full id",
                    id
                )
            }
            SnipboxError::ImportFailed(msg) => {
                format!(
                    "Import failed: {}\n\n\
                    Expected a JSON document such as:\n\
                    {{ \"snippets\": [ {{ \"id\": \"...\", \"title\": \"...\" }} ] }}\n\
                    Your library was left unchanged.",
                    msg
                )
            }
            SnipboxError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: snipbox config editor 'vim'",
                    msg
                )
            }
            SnipboxError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: snipbox config default_language rust",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SnipboxError
pub type Result<T> = std::result::Result<T, SnipboxError>;
