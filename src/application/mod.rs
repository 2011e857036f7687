//! Application layer - Use cases and orchestration

pub mod doctor;
pub mod exchange;
pub mod init;
pub mod manage_config;
pub mod query;
pub mod repository;

pub use doctor::DoctorReport;
pub use exchange::{ExchangeService, ImportReport, EXPORT_FILENAME};
pub use manage_config::ConfigService;
pub use query::QueryService;
pub use repository::{Clock, SnippetRepository};
