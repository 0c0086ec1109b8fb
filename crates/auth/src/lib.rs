//! Authentication and signing for the relay.
//!
//! Two separate concerns live here:
//!
//! - **Inbound**: [`AlertAuthenticator`] checks the shared secret on
//!   TradingView alerts with a constant-time comparison.
//! - **Outbound**: [`BitgetCredentials`] and [`RequestSigner`] implement the
//!   Bitget API authentication scheme (HMAC-SHA256 over
//!   `timestamp + method + path + body`, base64-encoded, sent via
//!   `ACCESS-*` headers).
//!
//! Secret material is wrapped in `SecretString` to prevent accidental
//! logging and ensure memory is zeroed on drop.

mod alert;
mod credentials;
mod error;
mod signer;

pub use alert::AlertAuthenticator;
pub use credentials::BitgetCredentials;
pub use error::AuthError;
pub use signer::RequestSigner;
