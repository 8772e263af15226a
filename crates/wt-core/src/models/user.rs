use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. Rows are provisioned through the admin surface;
/// the credential hash itself is written by whatever external flow manages
/// passwords - this application only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Modular-crypt style string (`algorithm$iterations$salt$hash`).
    /// Never serialized out to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}
