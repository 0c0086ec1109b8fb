//! Shared infrastructure for the relay: environment selection, process
//! configuration, and logging initialization.

mod config;
mod environment;
mod logging;

pub use config::{ConfigError, RelayConfig};
pub use environment::BitgetEnvironment;
pub use logging::init_logging;
