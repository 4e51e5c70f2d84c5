//! Tracing setup for the CLI.
//!
//! Library code only emits events; the binary decides where they go. Output
//! goes to stderr so command results on stdout stay clean. `RUST_LOG`
//! overrides the default filter, which is `debug` under `WORKHOURS_DEBUG` and
//! `warn` otherwise, so fail-soft warnings from the calculator are always
//! visible. Setting `RUST_LOG` alone does not change where results go.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let default_level = if is_debug_mode() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
