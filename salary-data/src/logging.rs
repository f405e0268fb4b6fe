use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Loader warnings stay visible.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is unset and verbose output was requested.
pub const VERBOSE_FILTER: &str = "debug";

fn make_filter(verbose: bool) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(from_env.as_deref(), verbose)
}

/// Uses `directives` when present and valid, otherwise the fallback level.
fn filter_for(
    directives: Option<&str>,
    verbose: bool,
) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Initialise the tracing subscriber. Call once at startup.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn`, or `debug` when `verbose` is set.
/// * Strips timestamps and target names to keep CLI output clean.
/// * Writes to stderr so stdout carries only the calculation output.
pub fn init_logging(verbose: bool) {
    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(verbose))
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
