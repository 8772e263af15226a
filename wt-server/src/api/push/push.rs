use axum::{Json, extract::State};

use wt_db::PushSubscriptionRepository;

use crate::{
    ApiUser, DeleteResponse, SubscribeRequest, SubscriptionResponse,
    api::error::{ApiError, Result as ApiResult},
    push::normalize_identifier,
    state::AppState,
};

/// Registers a push subscription for the authenticated user. Subscribing the
/// same identifier twice returns the existing row unchanged.
pub async fn subscribe(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Json(request): Json<SubscribeRequest>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let identifier = normalize_identifier(&state.push, &request.identifier)?;

    let repository = PushSubscriptionRepository::new(state.pool.clone());
    let subscription = repository.get_or_create(user.id, &identifier).await?;

    log::info!("user {} subscribed identifier {identifier}", user.username);

    Ok(Json(SubscriptionResponse {
        subscription: subscription.into(),
    }))
}

/// Removes a push subscription by identifier. Unsubscribing an identifier
/// that was never registered is a client error.
pub async fn unsubscribe(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Json(request): Json<SubscribeRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let identifier = normalize_identifier(&state.push, &request.identifier)?;

    let repository = PushSubscriptionRepository::new(state.pool.clone());
    let deleted = repository.delete_by_identifier(&identifier).await?;

    if !deleted {
        return Err(ApiError::validation("Subscription does not exist"));
    }

    log::info!("user {} unsubscribed identifier {identifier}", user.username);

    Ok(Json(DeleteResponse { deleted: true }))
}
