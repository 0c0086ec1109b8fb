//! Process-wide relay configuration.
//!
//! Loaded once at startup from environment variables (a `.env` file is
//! honored if present) and injected read-only into each component.

use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::environment::BitgetEnvironment;

/// Default address the webhook listener binds to.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
/// Default Bitget order-placement endpoint (mix v1).
const DEFAULT_ORDER_ENDPOINT: &str = "/api/mix/v1/order/placeOrder";
/// Default timeout for outbound exchange calls, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Default margin coin for futures orders.
const DEFAULT_MARGIN_COIN: &str = "USDT";

/// Errors during configuration loading. Fatal: the service never serves
/// traffic in a half-configured state.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable holds an unparseable value.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// The offending variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Immutable relay configuration.
///
/// Exchange API credentials are loaded separately (see the `auth` crate);
/// this struct carries everything else the pipeline needs.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the webhook listener binds to.
    pub listen_addr: SocketAddr,
    /// Shared secret TradingView alerts must carry.
    pub alert_secret: SecretString,
    /// When true, the pipeline signs but never sends exchange requests.
    pub dry_run: bool,
    /// Bitget environment (selects product type).
    pub environment: BitgetEnvironment,
    /// Margin coin for futures orders.
    pub margin_coin: String,
    /// Order-placement endpoint path. Bitget owns this contract; keeping it
    /// configurable lets an operator track an API version bump without a
    /// rebuild.
    pub order_endpoint: String,
    /// Timeout for outbound exchange calls.
    pub request_timeout: Duration,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError` if `ALERT_SECRET` is missing or any optional
    /// variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let alert_secret = std::env::var("ALERT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("ALERT_SECRET".into()))?;

        let listen_addr = env_or("RELAY_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "RELAY_LISTEN_ADDR".into(),
                reason: e.to_string(),
            })?;

        let dry_run = match env_or("DRY_RUN", "true").to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => {
                return Err(ConfigError::InvalidValue {
                    var: "DRY_RUN".into(),
                    reason: format!("expected true/false, got '{}'", other),
                })
            }
        };

        let timeout_secs = env_or(
            "REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_SECS".into(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            listen_addr,
            alert_secret: SecretString::from(alert_secret),
            dry_run,
            environment: BitgetEnvironment::from_env(),
            margin_coin: env_or("MARGIN_COIN", DEFAULT_MARGIN_COIN),
            order_endpoint: env_or("ORDER_ENDPOINT", DEFAULT_ORDER_ENDPOINT),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn test_config() -> RelayConfig {
        RelayConfig {
            listen_addr: DEFAULT_LISTEN_ADDR.parse().unwrap(),
            alert_secret: SecretString::from("s1"),
            dry_run: true,
            environment: BitgetEnvironment::Demo,
            margin_coin: DEFAULT_MARGIN_COIN.to_string(),
            order_endpoint: DEFAULT_ORDER_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    #[test]
    fn test_defaults_are_sane() {
        let config = test_config();
        assert_eq!(config.order_endpoint, "/api/mix/v1/order/placeOrder");
        assert_eq!(config.margin_coin, "USDT");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.dry_run);
    }

    #[test]
    fn test_secret_not_in_debug() {
        let config = test_config();
        assert_eq!(config.alert_secret.expose_secret(), "s1");

        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("s1"));
    }
}
