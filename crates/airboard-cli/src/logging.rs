// Logging setup, powered by tracing-subscriber.
//
// The engine logs through the `log` facade; the subscriber's `tracing-log`
// bridge picks those records up. Output goes to stderr so it never mixes
// with the menu on stdout.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise `level`.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", level, e)),
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level)?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
