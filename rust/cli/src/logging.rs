//! Tracing subscriber setup for the `pig` binary.
//!
//! Logs go to stderr so they never interleave with the game transcript or
//! the JSON event stream on stdout.

use tracing_subscriber::EnvFilter;

/// Primary variable holding a filter directive, e.g. `PIG_LOG=pig_engine=debug`
pub const LOG_ENV: &str = "PIG_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `PIG_LOG`, falling back to `RUST_LOG`, then `warn`.
/// A blank variable counts as unset. Unparseable directives fall back to `warn`.
pub fn build_filter(primary: Option<&str>, fallback: Option<&str>) -> EnvFilter {
    non_blank(primary)
        .or(non_blank(fallback))
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Initialize logging for the application. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn init_logging() {
    let primary = std::env::var(LOG_ENV).ok();
    let fallback = std::env::var("RUST_LOG").ok();
    let filter = build_filter(primary.as_deref(), fallback.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
