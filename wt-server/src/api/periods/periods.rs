//! Period trigger handlers
//!
//! These endpoints exist so mobile "URL trigger" apps can start and end
//! periods by opening a bare URL with the API key embedded in the path.

use crate::api::error::Result as ApiResult;
use crate::api::extractors::api_user::ApiUser;
use crate::api::periods::{
    period_end_response::PeriodEndResponse, period_list_response::PeriodListResponse,
    period_response::PeriodResponse, period_status_response::PeriodStatusResponse,
};
use crate::state::AppState;
use crate::tracker;

use axum::{Json, extract::State};

/// GET|POST /api/{api_key}/period/start
///
/// Start a new period, closing any period left running first.
pub async fn start_period(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<PeriodResponse>> {
    let period = tracker::start_period(&state.pool, &user).await?;

    Ok(Json(PeriodResponse {
        period: period.into(),
    }))
}

/// GET|POST /api/{api_key}/period/end
///
/// End every on-going period for the user.
pub async fn end_periods(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<PeriodEndResponse>> {
    let ended = tracker::end_ongoing_periods(&state.pool, &user).await?;

    Ok(Json(PeriodEndResponse { ended }))
}

/// GET /api/{api_key}/periods
///
/// Full period history for the user, newest first.
pub async fn list_periods(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<PeriodListResponse>> {
    let periods = wt_db::PeriodRepository::new(state.pool.clone())
        .find_for_user(user.id)
        .await?;

    Ok(Json(PeriodListResponse {
        periods: periods.into_iter().map(Into::into).collect(),
    }))
}

/// GET|POST /api/{api_key}/period
///
/// Report whether a period is currently on-going.
pub async fn period_status(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<PeriodStatusResponse>> {
    let period = tracker::ongoing_period(&state.pool, &user).await?;

    Ok(Json(PeriodStatusResponse {
        ongoing: period.is_some(),
        period: period.map(Into::into),
    }))
}
