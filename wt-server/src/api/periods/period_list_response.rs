use crate::api::periods::period_dto::PeriodDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PeriodListResponse {
    pub periods: Vec<PeriodDto>,
}
