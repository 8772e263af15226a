use crate::{ConfigError, ConfigErrorResult, DEFAULT_GCM_URL};

use serde::Deserialize;

/// Google Cloud Messaging settings for web push.
///
/// Only the project id is needed to serve the PWA manifest; the API key is
/// required solely for outbound delivery, so it stays optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// GCM sender / project id, served in the manifest.
    pub gcm_project_id: String,
    /// Server key for outbound notifications.
    pub gcm_api_key: Option<String>,
    /// Endpoint notifications are POSTed to.
    pub gcm_url: String,
    /// Prefix browsers put in front of subscription identifiers; stripped
    /// on subscribe.
    pub gcm_identifier_url: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            gcm_project_id: String::new(),
            gcm_api_key: None,
            gcm_url: String::from(DEFAULT_GCM_URL),
            gcm_identifier_url: format!("{DEFAULT_GCM_URL}/"),
        }
    }
}

impl PushConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.gcm_identifier_url.is_empty() {
            return Err(ConfigError::push("push.gcm_identifier_url must not be empty"));
        }

        Ok(())
    }
}
