use crate::api::periods::period_dto::PeriodDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PeriodStatusResponse {
    pub ongoing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodDto>,
}
