use chrono::{DateTime, Utc};
use serde::Serialize;
use wt_core::Period;

#[derive(Debug, Serialize)]
pub struct PeriodDto {
    pub id: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl From<Period> for PeriodDto {
    fn from(period: Period) -> Self {
        Self {
            id: period.id,
            started_at: period.started_at,
            ended_at: period.ended_at,
        }
    }
}
