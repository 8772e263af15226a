use serde::Deserialize;

/// Body for both subscribe and unsubscribe. The identifier arrives as a
/// full push-endpoint URL from the browser.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub identifier: String,
}
