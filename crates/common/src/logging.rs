//! Tracing subscriber initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize structured logging for the process.
///
/// Respects `RUST_LOG` for per-module filtering; defaults to `info`.
/// Calling this more than once is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
