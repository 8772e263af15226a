pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod push;
pub mod routes;
pub mod state;
pub mod tracker;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_user::ApiUser,
    manifest::ManifestResponse,
    periods::{
        period_dto::PeriodDto,
        period_end_response::PeriodEndResponse,
        period_list_response::PeriodListResponse,
        period_response::PeriodResponse,
        period_status_response::PeriodStatusResponse,
        periods::{end_periods, list_periods, period_status, start_period},
    },
    push::{
        delete_response::DeleteResponse,
        push::{subscribe, unsubscribe},
        subscribe_request::SubscribeRequest,
        subscription_dto::SubscriptionDto,
        subscription_response::SubscriptionResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
