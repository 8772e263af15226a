//! Axum extractor for API-key authentication

use crate::api::error::ApiError;
use crate::state::AppState;

use std::collections::HashMap;
use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use wt_core::User;
use wt_db::UserRepository;

/// Authenticates the request from its API key and yields the resolved
/// user.
///
/// The token is taken from the `{api_key}` path segment when the route
/// carries one (URL-trigger endpoints for mobile apps that can only open
/// a bare URL), otherwise from the `X-Api-Key` header (JSON endpoints).
///
/// Because axum runs extractors in argument order with the body last,
/// putting `ApiUser` before a `Json` parameter guarantees authentication
/// happens before - and short-circuits - body validation.
pub struct ApiUser(pub User);

impl FromRequestParts<AppState> for ApiUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = raw_token(parts, state).await?;

            let store = UserRepository::new(state.pool.clone());
            let user = state.api_keys.validate(&store, &token).await?;

            log::debug!("Authenticated user {} via API key", user.id);
            Ok(ApiUser(user))
        }
    }
}

/// Locate the raw token string in the request.
async fn raw_token(parts: &mut Parts, state: &AppState) -> Result<String, ApiError> {
    #[allow(clippy::collapsible_if)]
    if let Ok(Path(params)) =
        Path::<HashMap<String, String>>::from_request_parts(parts, state).await
    {
        if let Some(token) = params.get("api_key") {
            return Ok(token.clone());
        }
    }

    if let Some(value) = parts.headers.get("X-Api-Key") {
        if let Ok(token) = value.to_str() {
            return Ok(token.to_string());
        }
    }

    Err(ApiError::bad_api_key("no API key in request"))
}
