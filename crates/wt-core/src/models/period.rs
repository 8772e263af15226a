use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contiguous stretch of work for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub id: i64,
    pub user_id: i64,

    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Period {
    pub fn is_ongoing(&self) -> bool {
        self.ended_at.is_none()
    }
}
