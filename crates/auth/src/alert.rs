//! Inbound alert authentication.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use model::Alert;

use crate::error::AuthError;

/// Validates that inbound alerts carry the configured shared secret.
///
/// Fails closed: a missing secret field or any mismatch yields
/// [`AuthError::Unauthorized`]. The comparison is constant-time so response
/// latency does not leak how much of a guessed secret matched.
pub struct AlertAuthenticator {
    secret: SecretString,
}

impl AlertAuthenticator {
    /// Create an authenticator for the configured alert secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Check the alert's secret against the configured one.
    pub fn authenticate(&self, alert: &Alert) -> Result<(), AuthError> {
        let presented = alert.secret.as_deref().ok_or(AuthError::Unauthorized)?;

        let expected = self.secret.expose_secret().as_bytes();
        if presented.as_bytes().ct_eq(expected).into() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}
