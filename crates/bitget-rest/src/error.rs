//! Bitget REST error types.

use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when talking to the Bitget API.
#[derive(Debug, Error)]
pub enum BitgetRestError {
    /// Transport-level failure (timeout, connection, non-2xx status, parse).
    #[error("transport error: {0}")]
    Rest(#[from] RestError),

    /// Bitget received and understood the request but declined it
    /// (bad leverage, insufficient margin, symbol not tradable, ...).
    #[error("exchange rejected order: [{code}] {message}")]
    Rejected {
        /// Bitget error code (e.g. "40754").
        code: String,
        /// Bitget error message, passed through verbatim.
        message: String,
    },

    /// A 2xx success envelope arrived without the expected payload field.
    #[error("malformed exchange response: {0}")]
    MalformedResponse(String),

    /// Failed to serialize the order body.
    #[error("failed to encode order body: {0}")]
    Encode(#[from] serde_json::Error),
}
