#![allow(dead_code)]

//! Test infrastructure for wt-server API tests

use std::sync::Arc;

use sqlx::SqlitePool;

use wt_auth::ApiKeys;
use wt_config::PushConfig;
use wt_core::User;
use wt_db::UserRepository;
use wt_server::{AppState, push::Notifier};

pub const TEST_SIGNING_KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

pub const TEST_IDENTIFIER_URL: &str = "https://android.googleapis.com/gcm/send/";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    wt_db::connection::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn test_push_config() -> PushConfig {
    PushConfig {
        gcm_project_id: String::from("test-project"),
        gcm_api_key: None,
        gcm_url: String::from("https://gcm.invalid/send"),
        gcm_identifier_url: String::from(TEST_IDENTIFIER_URL),
    }
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let push = test_push_config();

    AppState {
        pool,
        api_keys: Arc::new(ApiKeys::new(TEST_SIGNING_KEY)),
        push: push.clone(),
        notifier: Arc::new(Notifier::new(push)),
    }
}

/// Create a test user with a Django-style credential hash
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(
            username,
            &format!("pbkdf2_sha256$390000$salt-{username}$aGFzaA=="),
        )
        .await
        .expect("Failed to create test user")
}

/// Issue an API key for a user the way the server would
pub fn issue_api_key(state: &AppState, user: &User) -> String {
    state.api_keys.issue(user)
}
