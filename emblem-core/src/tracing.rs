//! Tracing subscriber setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "EMBLEM_LOG";

/// Install the global tracing subscriber, reading the filter from
/// `EMBLEM_LOG` (default `info`). Safe to call more than once — later
/// calls are no-ops.
pub fn init() {
    init_with_default_filter("info");
}

/// Install the global tracing subscriber with an explicit fallback
/// filter, still honoring `EMBLEM_LOG` when set.
pub fn init_with_default_filter(default: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
