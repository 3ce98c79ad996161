//! Structured logging setup for Strata tools and tests.
//!
//! Console output goes through a `tracing` fmt layer with uptime timestamps
//! and module targets; debug builds can additionally write JSON records to a
//! file for post-mortem analysis. Filtering honors `RUST_LOG`, falling back
//! to the given filter string.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor an override is supplied.
const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// `filter` overrides the built-in default (`info`); `RUST_LOG` takes
/// precedence over both. When `log_dir` is given and this is a debug build,
/// a JSON file layer writing `strata.log` is attached alongside the console
/// layer.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, filter: Option<&str>) {
    let fallback = filter.unwrap_or(DEFAULT_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("strata.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` with the built-in default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
