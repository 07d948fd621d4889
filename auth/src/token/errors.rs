use thiserror::Error;

/// Error type for session token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    IssueFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
