use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PeriodEndResponse {
    /// Number of on-going periods that were closed.
    pub ended: u64,
}
