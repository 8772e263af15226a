use serde::{Deserialize, Serialize};

/// A browser push subscription, stored as the normalized GCM identifier
/// (the endpoint URL with the generic prefix stripped away).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscription {
    pub id: i64,
    pub user_id: i64,

    pub identifier: String,
}
