use crate::Result as DbErrorResult;

use wt_auth::{ApiKeyError, Result as ApiKeyResult, UserStore};
use wt_core::User;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, username: &str, password_hash: &str) -> DbErrorResult<User> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: DateTime::from_timestamp(created_at.timestamp(), 0).unwrap_or_default(),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_user))
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_user))
    }

    /// Replace the stored credential hash. Every previously issued API key
    /// for this user stops validating from this point on.
    pub async fn set_password_hash(&self, id: i64, password_hash: &str) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> ApiKeyResult<Option<User>> {
        UserRepository::find_by_id(self, id)
            .await
            .map_err(|e| ApiKeyError::store(e.to_string()))
    }
}

fn map_user(row: SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap_or_default(),
    }
}
