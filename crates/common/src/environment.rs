//! Bitget environment configuration.
//!
//! Bitget exposes simulated USDT-margined futures as a separate product
//! type on the same REST host, so the environment selects the product
//! type rather than a different base URL.

use std::fmt;
use std::str::FromStr;

/// Bitget trading environment (production or demo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitgetEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Demo environment (simulated futures, fake money).
    Demo,
}

impl BitgetEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        "https://api.bitget.com"
    }

    /// Product type for USDT-margined futures endpoints.
    pub fn product_type(&self) -> &'static str {
        match self {
            Self::Production => "umcbl",
            Self::Demo => "sumcbl",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Load environment from `BITGET_ENVIRONMENT` env var.
    ///
    /// Returns `Production` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("BITGET_ENVIRONMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for BitgetEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for BitgetEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "mainnet" | "main" => Ok(Self::Production),
            "demo" | "sim" | "paper" | "sandbox" => Ok(Self::Demo),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'demo'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults() {
        let env = BitgetEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://api.bitget.com");
        assert_eq!(env.product_type(), "umcbl");
        assert!(env.is_production());
    }

    #[test]
    fn test_demo_product_type() {
        let env = BitgetEnvironment::Demo;
        assert_eq!(env.product_type(), "sumcbl");
        assert!(!env.is_production());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "prod".parse::<BitgetEnvironment>().unwrap(),
            BitgetEnvironment::Production
        );
        assert_eq!(
            "paper".parse::<BitgetEnvironment>().unwrap(),
            BitgetEnvironment::Demo
        );
        assert!("staging".parse::<BitgetEnvironment>().is_err());
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(BitgetEnvironment::default(), BitgetEnvironment::Production);
    }
}
