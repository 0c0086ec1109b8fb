//! Secure Bitget API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret material
//! and ensure memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Bitget API credentials for authenticated requests.
///
/// The secret key and passphrase are wrapped in `SecretString`, which
/// prevents accidental Debug/Display printing and zeros memory on drop.
#[derive(Clone)]
pub struct BitgetCredentials {
    api_key: String,
    secret_key: SecretString,
    passphrase: SecretString,
}

impl BitgetCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BITGET_API_KEY` - The API key (public)
    /// - `BITGET_API_SECRET` - The secret key (private)
    /// - `BITGET_API_PASSPHRASE` - The account passphrase (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if any variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var("BITGET_API_KEY")
            .map_err(|_| AuthError::MissingEnvVar("BITGET_API_KEY".into()))?;

        let secret_key = std::env::var("BITGET_API_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("BITGET_API_SECRET".into()))?;

        let passphrase = std::env::var("BITGET_API_PASSPHRASE")
            .map_err(|_| AuthError::MissingEnvVar("BITGET_API_PASSPHRASE".into()))?;

        Ok(Self::new(api_key, secret_key, passphrase))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials come from other sources.
    pub fn new(api_key: String, secret_key: String, passphrase: String) -> Self {
        Self {
            api_key,
            secret_key: SecretString::from(secret_key),
            passphrase: SecretString::from(passphrase),
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// Only use this for cryptographic operations. Never log or display
    /// the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Expose the passphrase for the `ACCESS-PASSPHRASE` header.
    ///
    /// Only use this when assembling request headers.
    pub fn expose_passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl std::fmt::Debug for BitgetCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitgetCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
