use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Boundary mapping from domain errors to transport status codes.
///
/// Infrastructure failures are logged here and surface as a generic
/// internal status; their details never reach the caller.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::InvalidInput(msg) => Status::invalid_argument(*msg),
            AuthError::InvalidCredentials => {
                Status::invalid_argument("email or password is incorrect")
            }
            AuthError::UserAlreadyExists => Status::already_exists("user already exists"),
            AuthError::AppNotFound => Status::invalid_argument("invalid app_id"),
            AuthError::UserNotFound => Status::not_found("user not found"),
            AuthError::Hashing(_) | AuthError::TokenIssue(_) | AuthError::Storage(_) => {
                tracing::error!(error = %err, "Internal error while handling auth request");
                Status::internal("internal error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::auth::errors::StoreError;

    #[test]
    fn test_domain_errors_map_to_expected_codes() {
        let cases: Vec<(AuthError, Code)> = vec![
            (
                AuthError::InvalidInput("email is not provided"),
                Code::InvalidArgument,
            ),
            (AuthError::InvalidCredentials, Code::InvalidArgument),
            (AuthError::UserAlreadyExists, Code::AlreadyExists),
            (AuthError::AppNotFound, Code::InvalidArgument),
            (AuthError::UserNotFound, Code::NotFound),
            (
                AuthError::Storage(StoreError::Database("boom".to_string()).to_string()),
                Code::Internal,
            ),
        ];

        for (err, expected) in cases {
            let status: Status = err.into();
            assert_eq!(status.code(), expected);
        }
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let status: Status = AuthError::Storage("connection refused at 10.0.0.5".to_string()).into();
        assert_eq!(status.message(), "internal error");
    }
}
