//! snipbox - Local code snippet library
//!
//! Stores code snippets with titles, languages, descriptions and tags in a
//! single JSON document, and serves search, language-filtered and
//! recency-ordered views over them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::SnipboxError;
