use crate::{admin, api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Trigger apps can only open a URL, so the period endpoints accept GET
    // as well as POST.
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // PWA manifest
        .route("/manifest", get(api::manifest::manifest))
        // URL-trigger period endpoints (API key in the path)
        .route(
            "/api/{api_key}/periods",
            get(api::periods::periods::list_periods),
        )
        .route(
            "/api/{api_key}/period",
            get(api::periods::periods::period_status).post(api::periods::periods::period_status),
        )
        .route(
            "/api/{api_key}/period/start",
            get(api::periods::periods::start_period).post(api::periods::periods::start_period),
        )
        .route(
            "/api/{api_key}/period/end",
            get(api::periods::periods::end_periods).post(api::periods::periods::end_periods),
        )
        // Push subscription endpoints (API key in the X-Api-Key header)
        .route("/push/subscribe", post(api::push::push::subscribe))
        .route("/push/unsubscribe", post(api::push::push::unsubscribe))
        // Admin endpoints
        .route("/admin/users", post(admin::create_user))
        .route("/admin/users/{user_id}/api-key", get(admin::api_key))
        .route("/admin/notify", post(admin::notify))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
