//! Relay pipeline error taxonomy.

use thiserror::Error;

use auth::AuthError;
use bitget_rest::BitgetRestError;
use model::InvalidOrder;

/// Errors the pipeline surfaces to the caller.
///
/// Each variant maps to one HTTP status class via [`RelayError::status`].
/// Authentication and validation failures are the caller's fault (4xx);
/// exchange rejections and transport failures are 5xx-class and logged with
/// full context. None of them trigger a retry: a duplicate order placement
/// risks a duplicate fill.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Bad or missing shared secret, or a body too malformed to check one.
    #[error("unauthorized")]
    Unauthorized,

    /// Malformed or semantically invalid alert fields.
    #[error("invalid field '{field}': {reason}")]
    Validation {
        /// The offending alert field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The exchange received the request but declined the order.
    #[error("exchange rejected order: [{code}] {message}")]
    ExchangeRejected {
        /// Exchange error code, passed through verbatim.
        code: String,
        /// Exchange error message, passed through verbatim.
        message: String,
    },

    /// Network, timeout, or protocol failure reaching the exchange.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl RelayError {
    /// Shorthand for a validation failure naming the offending field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The HTTP status this failure maps to.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Validation { .. } => 400,
            Self::ExchangeRejected { .. } => 502,
            Self::Transport(_) => 504,
        }
    }
}

impl From<AuthError> for RelayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => Self::Unauthorized,
            // Missing credentials are caught at startup; reaching here
            // means the request cannot be authenticated either way.
            AuthError::MissingEnvVar(_) => Self::Unauthorized,
        }
    }
}

impl From<InvalidOrder> for RelayError {
    fn from(err: InvalidOrder) -> Self {
        Self::Validation {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<BitgetRestError> for RelayError {
    fn from(err: BitgetRestError) -> Self {
        match err {
            BitgetRestError::Rejected { code, message } => {
                Self::ExchangeRejected { code, message }
            }
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RelayError::Unauthorized.status(), 401);
        assert_eq!(RelayError::validation("quantity", "missing").status(), 400);
        assert_eq!(
            RelayError::ExchangeRejected {
                code: "-2010".into(),
                message: "insufficient margin".into()
            }
            .status(),
            502
        );
        assert_eq!(RelayError::Transport("timeout".into()).status(), 504);
    }

    #[test]
    fn test_invalid_order_names_field() {
        let err: RelayError = InvalidOrder::NonPositiveQuantity(Decimal::ZERO).into();
        match err {
            RelayError::Validation { field, .. } => assert_eq!(field, "quantity"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_passes_code_through() {
        let err: RelayError = BitgetRestError::Rejected {
            code: "40754".into(),
            message: "balance not enough".into(),
        }
        .into();

        match err {
            RelayError::ExchangeRejected { code, message } => {
                assert_eq!(code, "40754");
                assert_eq!(message, "balance not enough");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_non_rejection_exchange_error_is_transport() {
        let err: RelayError =
            BitgetRestError::MalformedResponse("no order id in response".into()).into();

        assert!(matches!(err, RelayError::Transport(_)));
        assert_eq!(err.status(), 504);
    }
}
