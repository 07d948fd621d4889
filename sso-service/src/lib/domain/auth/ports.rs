use async_trait::async_trait;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::User;

/// Persistence port for user identities.
///
/// Any storage engine satisfying this contract is substitutable without
/// touching the engine. Email uniqueness must be enforced atomically at the
/// storage boundary; `save_user` is a single insert-if-absent operation,
/// never a lookup followed by an insert.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Returns
    /// The storage-assigned user id
    ///
    /// # Errors
    /// * `AlreadyExists` - the email is already registered
    /// * `Database` - storage operation failed
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError>;

    /// Look up a user by email.
    ///
    /// # Errors
    /// * `NotFound` - no user with this email
    /// * `Database` - storage operation failed
    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError>;

    /// Query the admin flag for a user id.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn is_admin(&self, user_id: i64) -> Result<bool, StoreError>;
}

/// Read-only port for the tenant application registry.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Look up an application and its signing secret by id.
    ///
    /// # Errors
    /// * `NotFound` - application is not provisioned
    /// * `Database` - storage operation failed
    async fn find_app(&self, app_id: i64) -> Result<App, StoreError>;
}
