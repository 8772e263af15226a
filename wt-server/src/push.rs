//! Push notification delivery through Google Cloud Messaging.

use error_location::ErrorLocation;
use serde_json::json;
use std::panic::Location;
use thiserror::Error;

use wt_config::PushConfig;
use wt_core::PushSubscription;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("{message} {location}")]
    BadIdentifier {
        message: String,
        location: ErrorLocation,
    },
    #[error("GCM API key is not configured {location}")]
    MissingApiKey { location: ErrorLocation },
    #[error("Push delivery failed: {source} {location}")]
    Delivery {
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl PushError {
    #[track_caller]
    pub fn bad_identifier(message: impl Into<String>) -> Self {
        Self::BadIdentifier {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_api_key() -> Self {
        Self::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delivery(source: reqwest::Error) -> Self {
        Self::Delivery {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type PushResult<T> = Result<T, PushError>;

/// Strips the generic GCM endpoint prefix from a browser-supplied
/// subscription URL, leaving only the registration identifier. Endpoints
/// from other push services are rejected.
pub fn normalize_identifier(config: &PushConfig, identifier: &str) -> PushResult<String> {
    match identifier.strip_prefix(&config.gcm_identifier_url) {
        Some(suffix) if !suffix.is_empty() => Ok(suffix.to_owned()),
        _ => Err(PushError::bad_identifier(
            "Expected a Google Cloud Messaging push subscription",
        )),
    }
}

/// Sends data-less GCM pings. The payload only names the registration id;
/// the service worker on the receiving end decides what to show.
pub struct Notifier {
    client: reqwest::Client,
    config: PushConfig,
}

impl Notifier {
    pub fn new(config: PushConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn notify_subscription(&self, subscription: &PushSubscription) -> PushResult<()> {
        let api_key = self
            .config
            .gcm_api_key
            .as_deref()
            .ok_or_else(PushError::missing_api_key)?;

        let response = self
            .client
            .post(&self.config.gcm_url)
            .header("Authorization", format!("key={api_key}"))
            .json(&json!({ "to": subscription.identifier }))
            .send()
            .await
            .map_err(PushError::delivery)?;

        // TODO: GCM reports NotRegistered in a 200 body; parse it and drop
        // the stale subscription instead of pinging it forever.
        response.error_for_status().map_err(PushError::delivery)?;

        Ok(())
    }
}
