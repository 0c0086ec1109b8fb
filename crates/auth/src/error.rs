use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The inbound alert did not carry the correct shared secret.
    #[error("alert secret missing or mismatched")]
    Unauthorized,
}
