// src/users.rs

use async_trait::async_trait;
use bcrypt::verify;
use log::info;
use sqlx::MySqlPool;
use thiserror::Error;

use crate::models::user::User;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password verification failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("password verification task failed: {0}")]
    Blocking(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}

pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

/// Checks an email/password pair. `Ok(None)` means the credentials are wrong;
/// unknown email and wrong password are not told apart.
pub async fn authenticate(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<Option<User>, UserError> {
    let user = match store.find_by_email(email.trim()).await? {
        Some(user) => user,
        None => {
            info!("Login attempt for unknown email: {}", email);
            return Ok(None);
        }
    };

    // bcrypt is CPU bound; keep it off the async workers.
    let password = password.to_owned();
    let hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify(password, &hash))
        .await
        .map_err(|e| UserError::Blocking(e.to_string()))??;

    if !valid {
        info!("Invalid password for user {}", user.id);
        return Ok(None);
    }
    Ok(Some(user))
}
