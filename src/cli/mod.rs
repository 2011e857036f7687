//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_doctor_report, format_language_list, format_snippet_detail, format_snippet_list,
};
