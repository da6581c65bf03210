//! Structured logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::LOG_LEVELS;

/// Default filter directive for a verbosity level
///
/// Levels beyond the most verbose saturate at `trace`.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    let last = LOG_LEVELS.len() - 1;
    LOG_LEVELS
        .get(usize::from(verbosity).min(last))
        .copied()
        .unwrap_or("trace")
}

/// Install a stderr subscriber honouring `RUST_LOG`
///
/// Falls back to the filter for `verbosity` when `RUST_LOG` is unset or
/// invalid. Returns false if a global subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
