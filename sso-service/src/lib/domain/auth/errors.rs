use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Closed error set returned by storage collaborators.
///
/// The engine inspects these by kind, never by message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record already exists")]
    AlreadyExists,

    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

/// Domain error taxonomy returned by the auth engine.
///
/// The engine returns these typed variants and never logs or retries; the
/// RPC facade owns the mapping to transport status codes and must not leak
/// the infrastructure variants to callers.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing request fields. The caller's fault, never retried.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Unknown email or wrong password. Collapsed into one variant so a
    /// caller cannot tell which part of the credential was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration conflict on a unique email.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Login referenced an unknown tenant application.
    #[error("app not found")]
    AppNotFound,

    /// Admin query referenced an unknown user.
    #[error("user not found")]
    UserNotFound,

    // Infrastructure failures, opaque to callers.
    #[error("password hashing error: {0}")]
    Hashing(#[from] PasswordError),

    #[error("token issuance error: {0}")]
    TokenIssue(#[from] TokenError),

    #[error("storage error: {0}")]
    Storage(String),
}
