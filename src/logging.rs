use tracing_subscriber::EnvFilter;

use crate::core::config::ShellConfig;

/// Filter directive override, e.g. `OSC_LOG=osc=trace`.
pub const LOG_ENV: &str = "OSC_LOG";

pub fn init(config: &ShellConfig) {
    let default_level = if config.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
