use crate::Result as DbErrorResult;

use wt_core::PushSubscription;

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct PushSubscriptionRepository {
    pool: SqlitePool,
}

impl PushSubscriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent subscribe: a client app may report the same subscription
    /// more than once.
    pub async fn get_or_create(
        &self,
        user_id: i64,
        identifier: &str,
    ) -> DbErrorResult<PushSubscription> {
        if let Some(existing) = self.find_by_identifier(identifier).await? {
            return Ok(existing);
        }

        let result = sqlx::query(
            "INSERT INTO push_subscriptions (user_id, identifier) VALUES (?, ?)",
        )
        .bind(user_id)
        .bind(identifier)
        .execute(&self.pool)
        .await?;

        Ok(PushSubscription {
            id: result.last_insert_rowid(),
            user_id,
            identifier: identifier.to_string(),
        })
    }

    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> DbErrorResult<Option<PushSubscription>> {
        let row = sqlx::query(
            "SELECT id, user_id, identifier FROM push_subscriptions WHERE identifier = ?",
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_subscription))
    }

    /// Returns false when no subscription with that identifier existed.
    pub async fn delete_by_identifier(&self, identifier: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE identifier = ?")
            .bind(identifier)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<PushSubscription>> {
        let rows = sqlx::query("SELECT id, user_id, identifier FROM push_subscriptions")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(map_subscription).collect())
    }
}

fn map_subscription(row: SqliteRow) -> PushSubscription {
    PushSubscription {
        id: row.get("id"),
        user_id: row.get("user_id"),
        identifier: row.get("identifier"),
    }
}
