//! HMAC-SHA256 request signing for the Bitget API.
//!
//! Bitget signs the concatenation `{timestamp}{METHOD}{requestPath}{body}`
//! with the account's API secret and encodes the MAC in base64 (unlike the
//! hex encoding some other exchanges use). The signature travels in the
//! `ACCESS-SIGN` header alongside the key, timestamp, and passphrase.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::BitgetCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Request signer for authenticated Bitget API calls.
///
/// The signer is pure: given identical inputs it always produces the
/// identical signature, and it performs no I/O.
pub struct RequestSigner<'a> {
    credentials: &'a BitgetCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a BitgetCredentials) -> Self {
        Self { credentials }
    }

    /// Build the Bitget prehash string for a request.
    ///
    /// `request_path` must include the query string, if any; `body` is the
    /// exact byte-for-byte body that will be sent (empty for GET).
    pub fn prehash(timestamp_ms: i64, method: &str, request_path: &str, body: &str) -> String {
        format!("{}{}{}{}", timestamp_ms, method, request_path, body)
    }

    /// Sign a prehash string and return the base64-encoded signature.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        let result = mac.finalize();
        BASE64.encode(result.into_bytes())
    }

    /// Sign a request and return the complete authentication header set.
    ///
    /// Produces `ACCESS-KEY`, `ACCESS-SIGN`, `ACCESS-TIMESTAMP`,
    /// `ACCESS-PASSPHRASE`, `Content-Type`, and `locale` headers exactly as
    /// the Bitget order endpoints expect them.
    pub fn signed_headers(
        &self,
        method: &str,
        request_path: &str,
        body: &str,
        timestamp_ms: i64,
    ) -> Vec<(String, String)> {
        let signature = self.sign(&Self::prehash(timestamp_ms, method, request_path, body));
        self.headers_for(&signature, timestamp_ms)
    }

    /// Assemble the authentication headers for an already-computed signature.
    pub fn headers_for(&self, signature: &str, timestamp_ms: i64) -> Vec<(String, String)> {
        vec![
            ("ACCESS-KEY".into(), self.credentials.api_key().to_string()),
            ("ACCESS-SIGN".into(), signature.to_string()),
            ("ACCESS-TIMESTAMP".into(), timestamp_ms.to_string()),
            (
                "ACCESS-PASSPHRASE".into(),
                self.credentials.expose_passphrase().to_string(),
            ),
            ("Content-Type".into(), "application/json".into()),
            ("locale".into(), "en-US".into()),
        ]
    }
}
