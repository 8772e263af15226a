#![allow(dead_code)]

//! Shared fixtures for wt-db repository tests

use sqlx::SqlitePool;
use wt_core::User;
use wt_db::UserRepository;

/// In-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    wt_db::connection::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username, "pbkdf2_sha256$390000$testsalt$aGFzaA==")
        .await
        .expect("Failed to create test user")
}
