use crate::push::Notifier;

use std::sync::Arc;

use sqlx::SqlitePool;
use wt_auth::ApiKeys;
use wt_config::PushConfig;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// API key issuer/validator, built once from the process signing key.
    pub api_keys: Arc<ApiKeys>,
    pub push: PushConfig,
    pub notifier: Arc<Notifier>,
}
