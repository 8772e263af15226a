pub mod period_dto;
pub mod period_end_response;
pub mod period_list_response;
pub mod period_response;
pub mod period_status_response;
#[allow(clippy::module_inception)]
pub mod periods;
