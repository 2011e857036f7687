//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `snipbox=info`)
pub const LOG_ENV: &str = "SNIPBOX_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for command output.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}
