//! Progressive Web App manifest
//!
//! Served dynamically so the GCM project id lives in configuration
//! rather than a static file.

use crate::state::AppState;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ManifestResponse {
    pub shortname: String,
    pub name: String,
    pub gcm_sender_id: String,
}

/// GET /manifest
pub async fn manifest(State(state): State<AppState>) -> Json<ManifestResponse> {
    Json(ManifestResponse {
        shortname: "Worktrack".to_string(),
        name: "Worktrack".to_string(),
        gcm_sender_id: state.push.gcm_project_id.clone(),
    })
}
