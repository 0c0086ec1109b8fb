//! HTTP error mapping for the webhook API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use relay::RelayError;

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Exchange error code, when the exchange rejected the order.
    pub code: Option<String>,
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match err {
            RelayError::ExchangeRejected { code, message } => Self {
                status,
                message,
                code: Some(code),
            },
            other => Self {
                status,
                // RelayError messages are secret-free by construction.
                message: other.to_string(),
                code: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
            code: self.code,
        });
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = ApiError::from(RelayError::Unauthorized);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_rejection_keeps_exchange_code() {
        let err = ApiError::from(RelayError::ExchangeRejected {
            code: "-2010".into(),
            message: "insufficient margin".into(),
        });

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.code.as_deref(), Some("-2010"));
        assert_eq!(err.message, "insufficient margin");
    }

    #[test]
    fn test_transport_maps_to_504() {
        let err = ApiError::from(RelayError::Transport("request timeout".into()));
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);
    }
}
