//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipbox")]
#[command(about = "Local code snippet library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new snippet library
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Language used by `add` when none is given
        #[arg(short, long, default_value = "other")]
        language: String,
    },

    /// Add a snippet
    Add {
        /// Snippet title
        #[arg(long)]
        title: String,

        /// Language (default: configured default_language)
        #[arg(short, long)]
        language: Option<String>,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Tag (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Code given inline
        #[arg(long, conflicts_with_all = ["file", "edit"])]
        code: Option<String>,

        /// Read code from a file
        #[arg(short, long, conflicts_with = "edit")]
        file: Option<PathBuf>,

        /// Write code in the configured editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Edit an existing snippet
    Edit {
        /// Snippet id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New language
        #[arg(short, long)]
        language: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Replace tags with these (repeatable)
        #[arg(short, long = "tag", value_name = "TAG", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,

        /// New code given inline
        #[arg(long, conflicts_with_all = ["file", "edit"])]
        code: Option<String>,

        /// Read new code from a file
        #[arg(short, long, conflicts_with = "edit")]
        file: Option<PathBuf>,

        /// Edit the code in the configured editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Delete a snippet
    Rm {
        /// Snippet id
        id: String,
    },

    /// Show a snippet with its code
    Show {
        /// Snippet id
        id: String,

        /// Print only the code
        #[arg(long)]
        code_only: bool,
    },

    /// List snippets, newest first
    List {
        /// Case-insensitive text search (takes priority over --language)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this language ("all" for every language)
        #[arg(short, long, default_value = "all")]
        language: String,

        /// Only the six most recently updated
        #[arg(short, long)]
        recent: bool,

        /// Maximum number of snippets to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export all snippets as JSON
    Export {
        /// File or directory to write (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all snippets with the contents of a JSON export
    Import {
        /// JSON document to import
        path: PathBuf,
    },

    /// List recognized languages
    Languages,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(long)]
        list: bool,
    },

    /// Check the library for problems
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_tags() {
        let cli = Cli::try_parse_from([
            "snipbox", "add", "--title", "Hi", "-l", "python", "-t", "a", "--tag", "b",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                title,
                language,
                tags,
                ..
            } => {
                assert_eq!(title, "Hi");
                assert_eq!(language.as_deref(), Some("python"));
                assert_eq!(tags, vec!["a", "b"]);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_code_and_file_conflict() {
        let result = Cli::try_parse_from([
            "snipbox", "add", "--title", "Hi", "--code", "x", "--file", "a.py",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["snipbox", "list"]).unwrap();
        match cli.command {
            Commands::List {
                search,
                language,
                recent,
                limit,
            } => {
                assert_eq!(search, "");
                assert_eq!(language, "all");
                assert!(!recent);
                assert_eq!(limit, None);
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }
}
