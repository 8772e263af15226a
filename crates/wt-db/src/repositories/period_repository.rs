use crate::Result as DbErrorResult;

use wt_core::Period;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct PeriodRepository {
    pool: SqlitePool,
}

impl PeriodRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, started_at: DateTime<Utc>) -> DbErrorResult<Period> {
        let result = sqlx::query("INSERT INTO periods (user_id, started_at) VALUES (?, ?)")
            .bind(user_id)
            .bind(started_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(Period {
            id: result.last_insert_rowid(),
            user_id,
            started_at: DateTime::from_timestamp(started_at.timestamp(), 0).unwrap_or_default(),
            ended_at: None,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Period>> {
        let row = sqlx::query(
            "SELECT id, user_id, started_at, ended_at FROM periods WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_period))
    }

    /// All periods without an end, oldest first.
    pub async fn find_ongoing(&self, user_id: i64) -> DbErrorResult<Vec<Period>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, started_at, ended_at
              FROM periods
              WHERE user_id = ? AND ended_at IS NULL
              ORDER BY started_at ASC, id ASC
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_period).collect())
    }

    pub async fn set_ended_at(&self, id: i64, ended_at: DateTime<Utc>) -> DbErrorResult<()> {
        sqlx::query("UPDATE periods SET ended_at = ? WHERE id = ?")
            .bind(ended_at.timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_for_user(&self, user_id: i64) -> DbErrorResult<Vec<Period>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, started_at, ended_at
              FROM periods
              WHERE user_id = ?
              ORDER BY started_at DESC, id DESC
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_period).collect())
    }
}

fn map_period(row: SqliteRow) -> Period {
    Period {
        id: row.get("id"),
        user_id: row.get("user_id"),
        started_at: DateTime::from_timestamp(row.get("started_at"), 0).unwrap_or_default(),
        ended_at: row
            .get::<Option<i64>, _>("ended_at")
            .and_then(|ts| DateTime::from_timestamp(ts, 0)),
    }
}
