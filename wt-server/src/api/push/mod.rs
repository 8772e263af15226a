pub mod delete_response;
#[allow(clippy::module_inception)]
pub mod push;
pub mod subscribe_request;
pub mod subscription_dto;
pub mod subscription_response;
