//! Operator-facing provisioning endpoints.
//!
//! There is no interactive signup: an operator creates accounts here and
//! hands the returned API key to the client app. These routes carry no
//! authentication of their own and rely on the server binding to loopback.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use wt_core::User;
use wt_db::{PushSubscriptionRepository, UserRepository};

use crate::{
    api::error::{ApiError, Result as ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub password_hash: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user: User,
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub notified: u64,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<CreateUserResponse>> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username must not be empty"));
    }

    let repository = UserRepository::new(state.pool.clone());
    if repository.find_by_username(username).await?.is_some() {
        return Err(ApiError::validation("Username already exists"));
    }

    let password_hash = request.password_hash.unwrap_or_default();
    let user = repository.create(username, &password_hash).await?;
    let api_key = state.api_keys.issue(&user);

    log::info!("created user {} (id {})", user.username, user.id);

    Ok(Json(CreateUserResponse { user, api_key }))
}

/// Re-issues the API key for an existing user. The key is deterministic,
/// so this returns the same string until the user's credential changes.
pub async fn api_key(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<ApiKeyResponse>> {
    let repository = UserRepository::new(state.pool.clone());
    let user = repository
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("No such user"))?;

    Ok(Json(ApiKeyResponse {
        api_key: state.api_keys.issue(&user),
    }))
}

/// Pings every registered push subscription. Delivery failures are logged
/// and skipped so one dead registration cannot block the rest.
pub async fn notify(State(state): State<AppState>) -> ApiResult<Json<NotifyResponse>> {
    let repository = PushSubscriptionRepository::new(state.pool.clone());
    let subscriptions = repository.find_all().await?;

    let mut notified = 0u64;
    for subscription in subscriptions {
        match state.notifier.notify_subscription(&subscription).await {
            Ok(()) => notified += 1,
            Err(error) => {
                log::warn!(
                    "failed to notify subscription {}: {error}",
                    subscription.identifier
                );
            }
        }
    }

    Ok(Json(NotifyResponse { notified }))
}
