//! Generic REST client infrastructure.
//!
//! A thin wrapper around `reqwest` with:
//!
//! - Consistent error classification via `RestError`
//!   (timeout / connection / HTTP status / parse)
//! - Pre-encoded paths and exact body strings, so signed requests pass
//!   through byte-for-byte
//! - JSON response deserialization
//! - Header injection for authentication
//!
//! No retry logic lives here (or anywhere in the relay): a failed
//! order-placement call is reported, never replayed.

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
