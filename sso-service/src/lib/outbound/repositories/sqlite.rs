use async_trait::async_trait;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserStore;

/// SQLite-backed storage adapter implementing both collaborator ports.
///
/// Email uniqueness is enforced by the UNIQUE constraint on the users table,
/// so check-and-insert is a single atomic statement and concurrent
/// registrations of the same email cannot race.
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteStorage {
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?1, ?2)")
            .bind(email)
            .bind(pass_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .map_or(false, |db_err| db_err.is_unique_violation())
                {
                    StoreError::AlreadyExists
                } else {
                    StoreError::Database(e.to_string())
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let row = sqlx::query("SELECT id, email, pass_hash FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(User {
                id: r.get("id"),
                email: r.get("email"),
                pass_hash: r.get("pass_hash"),
            }),
            None => Err(StoreError::NotFound),
        }
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT is_admin FROM users WHERE id = ?1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(r.get("is_admin")),
            None => Err(StoreError::NotFound),
        }
    }
}

#[async_trait]
impl AppProvider for SqliteStorage {
    async fn find_app(&self, app_id: i64) -> Result<App, StoreError> {
        let row = sqlx::query("SELECT id, name, secret FROM apps WHERE id = ?1")
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(App {
                id: r.get("id"),
                name: r.get("name"),
                secret: r.get("secret"),
            }),
            None => Err(StoreError::NotFound),
        }
    }
}
