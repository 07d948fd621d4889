use std::sync::Arc;

use auth::PasswordHasher;
use auth::SessionClaims;
use auth::TokenHandler;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserStore;

/// Credential and token-issuance engine.
///
/// Stateless orchestrator: it owns no persistent state, only injected
/// collaborators and the configured token TTL, so it is safe for unbounded
/// concurrent invocation. Every call is an independent sequence of
/// collaborator calls with no retries; validation and lookup failures are
/// deterministic, and storage I/O failures pass through as opaque internal
/// errors.
pub struct AuthService<US, AP>
where
    US: UserStore,
    AP: AppProvider,
{
    users: Arc<US>,
    apps: Arc<AP>,
    password_hasher: PasswordHasher,
    token_ttl: Duration,
}

impl<US, AP> AuthService<US, AP>
where
    US: UserStore,
    AP: AppProvider,
{
    /// Create the engine with injected collaborators.
    ///
    /// # Arguments
    /// * `users` - user identity store
    /// * `apps` - tenant application registry
    /// * `token_ttl` - fixed time-to-live for issued session tokens
    pub fn new(users: Arc<US>, apps: Arc<AP>, token_ttl: Duration) -> Self {
        Self {
            users,
            apps,
            password_hasher: PasswordHasher::new(),
            token_ttl,
        }
    }

    /// Register a new user and return the storage-assigned id.
    ///
    /// # Errors
    /// * `InvalidInput` - empty email or password; storage is not touched
    /// * `UserAlreadyExists` - the email is already registered
    /// * `Hashing` / `Storage` - infrastructure failure
    pub async fn register(&self, email: &str, password: &str) -> Result<i64, AuthError> {
        if email.is_empty() {
            return Err(AuthError::InvalidInput("email is not provided"));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput("password is not provided"));
        }

        let pass_hash = self.password_hasher.hash(password)?;

        // Uniqueness is enforced atomically by the store. A conflict is a
        // domain-level outcome, never a silently returned existing id.
        match self.users.save_user(email, &pass_hash).await {
            Ok(user_id) => Ok(user_id),
            Err(StoreError::AlreadyExists) => Err(AuthError::UserAlreadyExists),
            Err(e) => Err(AuthError::Storage(e.to_string())),
        }
    }

    /// Verify credentials and issue a session token scoped to one application.
    ///
    /// # Errors
    /// * `InvalidInput` - empty email/password or zero app id
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `AppNotFound` - the application is not provisioned
    /// * `Hashing` / `TokenIssue` / `Storage` - infrastructure failure
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: i64,
    ) -> Result<String, AuthError> {
        if email.is_empty() {
            return Err(AuthError::InvalidInput("email is not provided"));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput("password is not provided"));
        }
        if app_id == 0 {
            return Err(AuthError::InvalidInput("app_id is required"));
        }

        // Unknown email and wrong password collapse into one error so the
        // response does not reveal which part of the credential failed.
        let user = match self.users.find_user_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(AuthError::Storage(e.to_string())),
        };

        if !self.password_hasher.verify(password, &user.pass_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.apps.find_app(app_id).await {
            Ok(app) => app,
            Err(StoreError::NotFound) => return Err(AuthError::AppNotFound),
            Err(e) => return Err(AuthError::Storage(e.to_string())),
        };

        // The signing secret is selected per application at issuance time;
        // there is no global secret.
        let claims = SessionClaims::new(user.id, user.email, app.id, self.token_ttl);
        let token = TokenHandler::new(app.secret.as_bytes()).issue(&claims)?;

        Ok(token)
    }

    /// Query whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `InvalidInput` - zero user id; storage is not touched
    /// * `UserNotFound` - user does not exist
    /// * `Storage` - infrastructure failure
    pub async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
        if user_id == 0 {
            return Err(AuthError::InvalidInput("user_id is not provided"));
        }

        match self.users.is_admin(user_id).await {
            Ok(flag) => Ok(flag),
            Err(StoreError::NotFound) => Err(AuthError::UserNotFound),
            Err(e) => Err(AuthError::Storage(e.to_string())),
        }
    }
}
